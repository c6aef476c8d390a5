use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a block string into its [`BlockKind`].
///
/// Rules are tried in priority order and the first match wins: heading,
/// code fence, quote, unordered list, ordered list. Anything else, including
/// the empty string, is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    if block.is_empty() {
        return BlockKind::Paragraph;
    }
    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading { level };
    }
    if CodeFence::encloses(block) {
        return BlockKind::Code;
    }
    if BlockQuote::matches(block) {
        return BlockKind::Quote;
    }
    if UnorderedList::matches(block) {
        return BlockKind::UnorderedList;
    }
    if OrderedList::matches(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Heading", BlockKind::Heading { level: 1 })]
    #[case("###### Six", BlockKind::Heading { level: 6 })]
    #[case("####### Seven", BlockKind::Paragraph)]
    #[case("#NoSpace", BlockKind::Paragraph)]
    #[case("```\ncode\n```", BlockKind::Code)]
    #[case("```\nnever closed", BlockKind::Paragraph)]
    #[case("> a quote\n> more", BlockKind::Quote)]
    #[case(">tight\n>lines", BlockKind::Quote)]
    #[case("> a quote\nnot quoted", BlockKind::Paragraph)]
    #[case("- one\n- two", BlockKind::UnorderedList)]
    #[case("-one\n-two", BlockKind::Paragraph)]
    #[case("* star", BlockKind::Paragraph)]
    #[case("1. a\n2. b", BlockKind::OrderedList)]
    #[case("1. a\n2. b\n3. c", BlockKind::OrderedList)]
    #[case("2. a\n3. b", BlockKind::Paragraph)]
    #[case("1. a\n3. b", BlockKind::Paragraph)]
    #[case("1.a\n2.b", BlockKind::Paragraph)]
    #[case("plain words", BlockKind::Paragraph)]
    #[case("", BlockKind::Paragraph)]
    fn classifies_blocks(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn heading_wins_over_later_rules() {
        // Starts like a heading and ends like a fence.
        assert_eq!(classify("# title ```"), BlockKind::Heading { level: 1 });
    }

    #[test]
    fn code_wins_over_quote() {
        assert_eq!(classify("```\n> not a quote\n```"), BlockKind::Code);
    }

    #[test]
    fn ordered_list_rejects_blank_line() {
        assert_eq!(classify("1. a\n \n2. b"), BlockKind::Paragraph);
    }

    #[test]
    fn ten_item_ordered_list() {
        let block = (1..=10)
            .map(|i| format!("{i}. item {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block), BlockKind::OrderedList);
    }
}
