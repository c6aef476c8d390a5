//! # Inline Parsing
//!
//! Two-phase tokenization of block text into typed spans.
//!
//! ## Architecture
//!
//! 1. **Structural extraction**: images, then links, are cut out of the text
//!    by a cursor scan. Everything between them stays plain.
//! 2. **Delimiter splitting**: bold (`**`), italic (`_`) and code (`` ` ``)
//!    passes run in that order over the spans that are still plain.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Plain, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: Inline-specific types with owned delimiters (Delimiter, Structure)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `tokenize()` main entry point with the per-phase helpers
//!
//! ## Precedence
//!
//! Images are extracted before links so `![alt](url)` never also yields a
//! link. Link and image spans are never revisited by the delimiter passes.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::{Delimiter, Structure};
pub use parser::{
    extract_images, extract_links, split_delimiter, split_images, split_links, tokenize,
};
pub use types::{InlineSpan, SpanKind};
