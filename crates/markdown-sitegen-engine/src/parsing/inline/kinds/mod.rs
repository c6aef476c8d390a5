//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Delimiter`**: `**`, `_` and `` ` ``, in the order they are split
//! - **`Structure`**: `![alt](url)` images and `[text](url)` links
//!
//! The parser asks these types for their markers; it never hardcodes them.

pub mod delimiter;
pub mod structure;

pub use delimiter::Delimiter;
pub use structure::Structure;
