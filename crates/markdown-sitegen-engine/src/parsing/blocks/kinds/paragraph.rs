/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default when no other block
/// rule matches. Inline parsing is applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Non-blank lines trimmed and joined with a single space.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
