use std::sync::OnceLock;

use regex::Regex;

/// Unordered (`- `) list block type.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    /// True when every non-empty line starts with `- `.
    pub fn matches(block: &str) -> bool {
        block
            .split('\n')
            .filter(|line| !line.is_empty())
            .all(|line| line.starts_with(Self::MARKER))
    }

    /// Item texts with the marker stripped and trimmed; blank lines skipped.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line).trim())
            .collect()
    }
}

/// Ordered (`1. `, `2. `, ...) list block type.
pub struct OrderedList;

impl OrderedList {
    /// Separator between an item number and its text.
    pub const SEPARATOR: &'static str = ". ";

    /// The exact marker line `index` (1-based) must start with.
    pub fn marker(index: usize) -> String {
        format!("{index}{}", Self::SEPARATOR)
    }

    /// True when there are no blank lines and lines are numbered from 1
    /// without gaps.
    pub fn matches(block: &str) -> bool {
        let lines: Vec<&str> = block.split('\n').collect();
        if lines.iter().any(|line| line.trim().is_empty()) {
            return false;
        }
        lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// Item texts with the number marker stripped and trimmed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(|line| match item_marker().find(line) {
                Some(m) => line[m.end()..].trim(),
                None => line.trim(),
            })
            .collect()
    }
}

fn item_marker() -> &'static Regex {
    static ITEM_MARKER: OnceLock<Regex> = OnceLock::new();
    ITEM_MARKER.get_or_init(|| Regex::new(r"^\d+\. ").expect("Invalid list item regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unordered_items() {
        assert_eq!(
            UnorderedList::items("- first\n- second  \n-  third"),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn unordered_marker_needs_space() {
        assert!(UnorderedList::matches("- a\n- b"));
        assert!(!UnorderedList::matches("- a\n-b"));
    }

    #[test]
    fn ordered_marker_format() {
        assert_eq!(OrderedList::marker(1), "1. ");
        assert_eq!(OrderedList::marker(12), "12. ");
    }

    #[test]
    fn ordered_items_strip_numbers() {
        assert_eq!(
            OrderedList::items("1. one\n2. two\n3. three"),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn ordered_items_strip_multi_digit_numbers() {
        let block = (1..=11)
            .map(|i| format!("{i}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        let items = OrderedList::items(&block);
        assert_eq!(items.len(), 11);
        assert!(items.iter().all(|item| *item == "item"));
    }

    #[test]
    fn ordered_requires_sequence_from_one() {
        assert!(OrderedList::matches("1. a\n2. b"));
        assert!(!OrderedList::matches("2. a\n3. b"));
        assert!(!OrderedList::matches("1. a\n1. b"));
    }
}
