//! # Block Parsing
//!
//! Two-phase block parsing over whole blocks rather than lines.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut on runs of blank lines
//!    into trimmed block strings
//!
//! 2. **Classification** (`classify`): each block string gets a `BlockKind`
//!    from its line prefixes, first matching rule wins
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `split_blocks` for blank-line separation
//! - **`classify`**: `classify` priority dispatch
//!
//! ## Key Invariants
//!
//! - A block's kind is a pure function of its own text
//! - Classification is total: anything unrecognised is a paragraph
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify;
pub use split::split_blocks;
pub use types::{Block, BlockKind};
