use crate::parsing::inline::types::InlineSpan;

/// A paired inline delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    /// Split order. `**` goes before `_` so bold markers are never
    /// consumed by a later pass.
    pub const ORDER: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub const fn token(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
            Delimiter::Code => "`",
        }
    }

    /// Wraps delimited text in the span this delimiter produces.
    pub fn span(self, text: impl Into<String>) -> InlineSpan {
        let text = text.into();
        match self {
            Delimiter::Bold => InlineSpan::Bold(text),
            Delimiter::Italic => InlineSpan::Italic(text),
            Delimiter::Code => InlineSpan::Code(text),
        }
    }
}
