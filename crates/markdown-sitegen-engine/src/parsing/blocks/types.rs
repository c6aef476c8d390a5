use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList};

/// The kind of a block, decided by [`classify`](super::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `######` followed by a space.
    Heading {
        /// Number of leading `#` characters (1-6).
        level: u8,
    },
    /// A block opening and closing with a backtick fence.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... with no gaps.
    OrderedList,
    /// The default when no other rule matches.
    Paragraph,
}

/// A classified block of document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Trimmed raw text, possibly spanning several lines.
    pub text: String,
    pub kind: BlockKind,
}

impl Block {
    /// Text that goes through inline tokenization as a single unit.
    ///
    /// Returns `None` for code blocks, whose body is a raw zone, and for
    /// lists, whose items are tokenized one at a time.
    pub fn inline_text(&self) -> Option<String> {
        match self.kind {
            BlockKind::Heading { .. } => Some(Heading::content(&self.text).to_string()),
            BlockKind::Quote => Some(BlockQuote::content(&self.text)),
            BlockKind::Paragraph => Some(Paragraph::content(&self.text)),
            BlockKind::Code | BlockKind::UnorderedList | BlockKind::OrderedList => None,
        }
    }

    /// Item texts with their markers stripped, for list blocks only.
    pub fn items(&self) -> Vec<&str> {
        match self.kind {
            BlockKind::UnorderedList => UnorderedList::items(&self.text),
            BlockKind::OrderedList => OrderedList::items(&self.text),
            _ => Vec::new(),
        }
    }

    /// Fenced body of a code block with the fence lines removed.
    pub fn code_body(&self) -> Option<String> {
        match self.kind {
            BlockKind::Code => Some(CodeFence::body(&self.text)),
            _ => None,
        }
    }
}
