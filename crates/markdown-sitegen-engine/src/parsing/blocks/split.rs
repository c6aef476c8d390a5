use std::sync::OnceLock;

use regex::Regex;

/// Separator between blocks: two or more consecutive newlines.
fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"\n{2,}").expect("Invalid block separator regex"))
}

/// Splits a document into trimmed, non-empty block strings in document order.
///
/// Runs of blank lines collapse into a single separator, so the result never
/// contains an empty block.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    separator()
        .split(markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_blank_lines() {
        let md = "# Heading\n\nParagraph one\nstill one\n\n- item";
        assert_eq!(
            split_blocks(md),
            vec!["# Heading", "Paragraph one\nstill one", "- item"]
        );
    }

    #[test]
    fn collapses_runs_of_blank_lines() {
        assert_eq!(split_blocks("a\n\n\n\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn trims_each_block() {
        assert_eq!(
            split_blocks("\n\n   leading\n\ntrailing   \n\n"),
            vec!["leading", "trailing"]
        );
    }

    #[test]
    fn single_newline_does_not_split() {
        assert_eq!(split_blocks("line one\nline two"), vec!["line one\nline two"]);
    }

    #[test]
    fn empty_and_whitespace_documents() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("   \n\n\t\n\n").is_empty());
    }

    #[test]
    fn code_fence_keeps_inner_indentation() {
        let md = "```\n    indented\n```";
        assert_eq!(split_blocks(md), vec!["```\n    indented\n```"]);
    }
}
