/// Errors raised when a node tree violates the serialization contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Leaf node has no value")]
    LeafWithoutValue,
    #[error("Parent node has no tag")]
    ParentWithoutTag,
    #[error("Parent node <{tag}> has no children")]
    ParentWithoutChildren { tag: String },
}

/// HTML attributes in insertion order, one value per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`. A key that is already present keeps its position and
    /// takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders ` key="value"` pairs, each with a leading space.
    pub fn to_html(&self) -> String {
        self.iter()
            .map(|(k, v)| format!(" {k}=\"{v}\""))
            .collect()
    }
}

/// Elements rendered as a bare opening tag with no content or closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

/// A node of the output HTML tree.
///
/// A parent exclusively owns its children; there is no sharing between
/// nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node without children: raw text when untagged, otherwise a single
    /// element wrapping `value`.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },
    /// An element wrapping an ordered list of child nodes.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// Untagged leaf emitting `value` verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// Tagged leaf `<tag>value</tag>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: tag.into(),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Adds an attribute and returns the node.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs_mut().insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } => tag.as_deref(),
            Self::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            Self::Leaf { attrs, .. } | Self::Parent { attrs, .. } => attrs,
        }
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        match self {
            Self::Leaf { attrs, .. } | Self::Parent { attrs, .. } => attrs,
        }
    }

    /// Children of a parent node; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Parent { children, .. } => children,
        }
    }

    /// Serializes the node and its descendants.
    ///
    /// Values are emitted as-is, without escaping.
    ///
    /// # Errors
    /// - [`RenderError::LeafWithoutValue`] for a non-void leaf with no value
    /// - [`RenderError::ParentWithoutTag`] for a parent with an empty tag
    /// - [`RenderError::ParentWithoutChildren`] for a childless parent
    pub fn to_html(&self) -> Result<String, RenderError> {
        match self {
            Self::Leaf { tag, value, attrs } => {
                let tag = tag.as_deref().filter(|t| !t.is_empty());
                match (tag, value) {
                    (Some(tag), _) if VOID_ELEMENTS.contains(&tag) => {
                        Ok(format!("<{tag}{}>", attrs.to_html()))
                    }
                    (_, None) => Err(RenderError::LeafWithoutValue),
                    (None, Some(value)) => Ok(value.clone()),
                    (Some(tag), Some(value)) => {
                        Ok(format!("<{tag}{}>{value}</{tag}>", attrs.to_html()))
                    }
                }
            }
            Self::Parent {
                tag,
                children,
                attrs,
            } => {
                if tag.is_empty() {
                    return Err(RenderError::ParentWithoutTag);
                }
                if children.is_empty() {
                    return Err(RenderError::ParentWithoutChildren { tag: tag.clone() });
                }
                let mut out = format!("<{tag}{}>", attrs.to_html());
                for child in children {
                    out.push_str(&child.to_html()?);
                }
                out.push_str(&format!("</{tag}>"));
                Ok(out)
            }
        }
    }
}
