use super::attributes::Attributes;

/// One element of the output document tree.
///
/// Containers exclusively own their children. Trees are built bottom-up and
/// not mutated afterwards; validity is checked when rendering, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    /// Terminal element. With no tag it renders as raw text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },
    /// Composite element. Rendering requires a non-empty tag and at least one child.
    Container {
        tag: String,
        children: Vec<DocumentNode>,
        attrs: Attributes,
    },
}

impl DocumentNode {
    /// An untagged leaf holding raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn container(tag: impl Into<String>, children: Vec<DocumentNode>) -> Self {
        Self::Container {
            tag: tag.into(),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Replaces the attributes, consuming the node while it is being built.
    pub fn with_attrs(self, attrs: Attributes) -> Self {
        match self {
            Self::Leaf { tag, value, .. } => Self::Leaf { tag, value, attrs },
            Self::Container { tag, children, .. } => Self::Container {
                tag,
                children,
                attrs,
            },
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } => tag.as_deref(),
            Self::Container { tag, .. } => Some(tag.as_str()),
        }
    }

    /// The leaf value; `None` for containers.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Leaf { value, .. } => value.as_deref(),
            Self::Container { .. } => None,
        }
    }

    /// The children of a container; empty for leaves.
    pub fn children(&self) -> &[DocumentNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Container { children, .. } => children.as_slice(),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            Self::Leaf { attrs, .. } | Self::Container { attrs, .. } => attrs,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}
