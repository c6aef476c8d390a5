/// A typed run of inline text.
///
/// Only links and images carry a target URL, so the variants make a target
/// on any other span unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Literal text.
    Plain(String),
    /// Text between `**` delimiters.
    Bold(String),
    /// Text between `_` delimiters.
    Italic(String),
    /// Text between backticks.
    Code(String),
    /// `[text](url)`.
    Link { text: String, url: String },
    /// `![alt](url)`.
    Image { alt: String, url: String },
}

/// Discriminant of an [`InlineSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl InlineSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            Self::Plain(_) => SpanKind::Plain,
            Self::Bold(_) => SpanKind::Bold,
            Self::Italic(_) => SpanKind::Italic,
            Self::Code(_) => SpanKind::Code,
            Self::Link { .. } => SpanKind::Link,
            Self::Image { .. } => SpanKind::Image,
        }
    }

    /// Display text: alt text for images, anchor text for links.
    pub fn content(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Bold(s) | Self::Italic(s) | Self::Code(s) => s,
            Self::Link { text, .. } => text,
            Self::Image { alt, .. } => alt,
        }
    }

    /// URL of a link or image.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Link { url, .. } | Self::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}
