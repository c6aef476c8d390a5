/// Fenced code block type with owned fence constant.
///
/// The whole block is treated as one token: it must open and close with the
/// fence, and nothing inside is tokenized.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// True when the block both starts and ends with a backtick fence.
    pub fn encloses(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// The fenced body: opening and closing fence lines dropped, remaining
    /// lines joined verbatim, with a trailing newline.
    ///
    /// Any info string on the opening fence goes with its line.
    pub fn body(block: &str) -> String {
        let mut lines: Vec<&str> = block.split('\n').collect();
        if lines.first().is_some_and(|l| l.starts_with(Self::BACKTICKS)) {
            lines.remove(0);
        }
        if lines.last().is_some_and(|l| l.starts_with(Self::BACKTICKS)) {
            lines.pop();
        }
        let mut body = lines.join("\n");
        body.push('\n');
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_enclosing_fence() {
        assert!(CodeFence::encloses("```\nx\n```"));
        assert!(CodeFence::encloses("```rust\nfn main() {}\n```"));
        assert!(!CodeFence::encloses("```\nx"));
        assert!(!CodeFence::encloses("x\n```"));
    }

    #[test]
    fn body_strips_fence_lines() {
        assert_eq!(CodeFence::body("```\nline1\nline2\n```"), "line1\nline2\n");
    }

    #[test]
    fn body_drops_info_string() {
        assert_eq!(CodeFence::body("```python\nprint(1)\n```"), "print(1)\n");
    }

    #[test]
    fn body_preserves_whitespace() {
        assert_eq!(
            CodeFence::body("```\n  indented\n\ttabbed  \n```"),
            "  indented\n\ttabbed  \n"
        );
    }

    #[test]
    fn single_line_fence_has_empty_body() {
        assert_eq!(CodeFence::body("```inline```"), "\n");
    }
}
