/// A bracketed inline construct cut out during structural extraction.
///
/// Both share the `[text](url)` shape; an image adds a leading `!`.
/// The text part may not contain brackets and the url part may not
/// contain parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    Image,
    Link,
}

impl Structure {
    pub const BANG: u8 = b'!';
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Bytes that open this construct.
    pub const fn open(self) -> &'static [u8] {
        match self {
            Structure::Image => b"![",
            Structure::Link => b"[",
        }
    }
}
