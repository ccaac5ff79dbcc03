use crate::parsing::inline::SpanKind;

/// A document tree that cannot be rendered.
///
/// `path` is a breadcrumb from the root to the offending node, e.g.
/// `div > ul[0] > li[1]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("leaf node at {path} has no value")]
    MissingValue { path: String },
    #[error("container node at {path} has no tag")]
    MissingTag { path: String },
    #[error("container node at {path} has no children")]
    EmptyChildren { path: String },
}

impl StructuralError {
    /// The breadcrumb of the node that failed validation.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingValue { path }
            | Self::MissingTag { path }
            | Self::EmptyChildren { path } => path,
        }
    }
}

/// An inline span assembled from loose parts that violates the span model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("unknown span type: {0}")]
    UnknownSpanType(String),
    #[error("{kind} span requires a target")]
    MissingTarget { kind: SpanKind },
    #[error("{kind} span cannot carry a target")]
    UnexpectedTarget { kind: SpanKind },
}
