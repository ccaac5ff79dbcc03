use std::{fmt, str::FromStr};

use crate::error::SpanError;

/// The discriminant of an [`InlineSpan`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub const ALL: [SpanKind; 6] = [
        Self::Text,
        Self::Bold,
        Self::Italic,
        Self::Code,
        Self::Link,
        Self::Image,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
        }
    }

    /// Links and images carry a target; nothing else does.
    pub fn has_target(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpanKind {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SpanError::UnknownSpanType(s.to_string()))
    }
}

/// A contiguous run of inline content with one styling.
///
/// Equality compares variant, content and target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Plain text, still eligible for later tokenizer stages.
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { content: String, target: String },
    Image { content: String, target: String },
}

impl InlineSpan {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn link(content: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link {
            content: content.into(),
            target: target.into(),
        }
    }

    pub fn image(content: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Image {
            content: content.into(),
            target: target.into(),
        }
    }

    /// Builds a span from loose parts, enforcing that only links and images have a target.
    pub fn from_parts(
        kind: SpanKind,
        content: impl Into<String>,
        target: Option<String>,
    ) -> Result<Self, SpanError> {
        let content = content.into();
        match (kind, target) {
            (SpanKind::Link, Some(target)) => Ok(Self::Link { content, target }),
            (SpanKind::Image, Some(target)) => Ok(Self::Image { content, target }),
            (SpanKind::Link | SpanKind::Image, None) => Err(SpanError::MissingTarget { kind }),
            (_, Some(_)) => Err(SpanError::UnexpectedTarget { kind }),
            (SpanKind::Text, None) => Ok(Self::Text(content)),
            (SpanKind::Bold, None) => Ok(Self::Bold(content)),
            (SpanKind::Italic, None) => Ok(Self::Italic(content)),
            (SpanKind::Code, None) => Ok(Self::Code(content)),
        }
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            Self::Text(_) => SpanKind::Text,
            Self::Bold(_) => SpanKind::Bold,
            Self::Italic(_) => SpanKind::Italic,
            Self::Code(_) => SpanKind::Code,
            Self::Link { .. } => SpanKind::Link,
            Self::Image { .. } => SpanKind::Image,
        }
    }

    /// The display text; the alt text for images.
    pub fn content(&self) -> &str {
        match self {
            Self::Text(c) | Self::Bold(c) | Self::Italic(c) | Self::Code(c) => c.as_str(),
            Self::Link { content, .. } | Self::Image { content, .. } => content.as_str(),
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Link { target, .. } | Self::Image { target, .. } => Some(target.as_str()),
            _ => None,
        }
    }
}
