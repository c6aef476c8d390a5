use crate::parsing::{
    ParseError,
    blocks::{Block, BlockKind},
    inline::{InlineSpan, tokenize},
    parse_document,
};

use super::node::HtmlNode;

/// Maps one inline span onto its HTML leaf.
pub fn span_to_html_node(span: &InlineSpan) -> HtmlNode {
    match span {
        InlineSpan::Plain(text) => HtmlNode::text(text.as_str()),
        InlineSpan::Bold(text) => HtmlNode::leaf("b", text.as_str()),
        InlineSpan::Italic(text) => HtmlNode::leaf("i", text.as_str()),
        InlineSpan::Code(text) => HtmlNode::leaf("code", text.as_str()),
        InlineSpan::Link { text, url } => {
            HtmlNode::leaf("a", text.as_str()).with_attr("href", url.as_str())
        }
        InlineSpan::Image { alt, url } => HtmlNode::leaf("img", "")
            .with_attr("src", url.as_str())
            .with_attr("alt", alt.as_str()),
    }
}

/// Tokenizes `text` and maps every span onto an HTML node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(tokenize(text)?.iter().map(span_to_html_node).collect())
}

/// Builds the HTML node for one classified block.
///
/// Code bodies are emitted as a single raw leaf inside `<pre><code>`.
pub fn block_to_html_node(block: &Block) -> Result<HtmlNode, ParseError> {
    let node = match block.kind {
        BlockKind::Heading { level } => {
            HtmlNode::parent(format!("h{level}"), inline_children(block)?)
        }
        BlockKind::Code => {
            let body = block.code_body().unwrap_or_default();
            HtmlNode::parent("pre", vec![HtmlNode::parent("code", vec![HtmlNode::text(body)])])
        }
        BlockKind::Quote => HtmlNode::parent("blockquote", inline_children(block)?),
        BlockKind::UnorderedList => HtmlNode::parent("ul", list_items(block)?),
        BlockKind::OrderedList => HtmlNode::parent("ol", list_items(block)?),
        BlockKind::Paragraph => HtmlNode::parent("p", inline_children(block)?),
    };
    Ok(node)
}

/// Converts a whole document into a root `<div>` holding one node per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ParseError> {
    let children = parse_document(markdown)
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

fn inline_children(block: &Block) -> Result<Vec<HtmlNode>, ParseError> {
    match block.inline_text() {
        Some(text) => text_to_children(&text),
        None => Ok(vec![]),
    }
}

fn list_items(block: &Block) -> Result<Vec<HtmlNode>, ParseError> {
    block
        .items()
        .into_iter()
        .map(|item| Ok(HtmlNode::parent("li", text_to_children(item)?)))
        .collect()
}
