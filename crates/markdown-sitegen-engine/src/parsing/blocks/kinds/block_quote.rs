/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True when every non-empty line starts with `>`.
    pub fn matches(block: &str) -> bool {
        block
            .split('\n')
            .filter(|line| !line.is_empty())
            .all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips one `>` and the whitespace around the line's text.
    pub fn strip_prefix(line: &str) -> &str {
        let trimmed = line.trim_start();
        trimmed.strip_prefix(Self::PREFIX).unwrap_or(trimmed).trim()
    }

    /// Quote content with prefixes removed, one line per quoted line.
    ///
    /// Newlines between quoted lines are kept.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_every_line_quoted() {
        assert!(BlockQuote::matches("> a\n> b"));
        assert!(BlockQuote::matches(">a"));
        assert!(!BlockQuote::matches("> a\nb"));
    }

    #[test]
    fn strip_single_prefix() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), "hello");
        assert_eq!(BlockQuote::strip_prefix(">hello  "), "hello");
    }

    #[test]
    fn strip_keeps_second_prefix() {
        assert_eq!(BlockQuote::strip_prefix(">> nested"), "> nested");
    }

    #[test]
    fn content_joins_with_newlines() {
        assert_eq!(
            BlockQuote::content("> first line\n> second line"),
            "first line\nsecond line"
        );
    }

    #[test]
    fn content_keeps_bare_marker_as_empty_line() {
        assert_eq!(BlockQuote::content("> a\n>\n> b"), "a\n\nb");
    }
}
