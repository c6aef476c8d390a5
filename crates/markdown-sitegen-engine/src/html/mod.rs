//! # HTML Tree
//!
//! Typed HTML nodes and the builder that maps classified blocks onto them.
//!
//! - **`node`**: `HtmlNode` (leaf or parent), `Attributes`, and `to_html`
//! - **`builder`**: block and span mapping, `markdown_to_html_node`

pub mod builder;
pub mod node;

pub use builder::{block_to_html_node, markdown_to_html_node, span_to_html_node, text_to_children};
pub use node::{Attributes, HtmlNode, RenderError};
