/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest heading level (`<h6>`).
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` opens with 1-6 `#` and a space.
    pub fn level(block: &str) -> Option<u8> {
        let b = block.as_bytes();
        let hashes = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&hashes) || b.get(hashes) != Some(&b' ') {
            return None;
        }
        u8::try_from(hashes).ok()
    }

    /// Heading text with the leading `#` run and one space removed, trimmed.
    pub fn content(block: &str) -> &str {
        let rest = block.trim_start_matches(Self::MARKER as char);
        rest.strip_prefix(' ').unwrap_or(rest).trim()
    }
}
