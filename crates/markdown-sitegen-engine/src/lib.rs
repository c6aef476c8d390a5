pub mod html;
pub mod io;
pub mod parsing;
pub mod title;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{HtmlNode, RenderError, markdown_to_html_node};
pub use parsing::{ParseError, blocks::BlockKind, inline::InlineSpan};
pub use title::{TitleError, extract_title};

/// Failure while turning a whole document into an HTML string.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Convert a markdown document into the serialized `<div>` fragment.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    let root = markdown_to_html_node(markdown)?;
    Ok(root.to_html()?)
}
