use std::collections::BTreeMap;

use serde::Serialize;

use super::html;

/// A node of the abstract output tree.
///
/// Text leaves carry literal text; escaping happens only when the tree is
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OutputNode {
    Element {
        kind: String,
        /// Attribute name to value, kept sorted so output is deterministic.
        attributes: BTreeMap<String, String>,
        children: Vec<OutputNode>,
    },
    Text(String),
}

impl OutputNode {
    /// An element with no attributes or children.
    pub fn element(kind: &str) -> Self {
        OutputNode::Element {
            kind: kind.to_string(),
            attributes: BTreeMap::new(),
            children: vec![],
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        OutputNode::Text(s.into())
    }

    /// Sets an attribute. No-op on text nodes.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let OutputNode::Element { attributes, .. } = &mut self {
            attributes.insert(name.to_string(), value.into());
        }
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Appends a child. No-op on text nodes.
    pub fn child(mut self, node: OutputNode) -> Self {
        if let OutputNode::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Appends every node in `nodes` as children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = OutputNode>) -> Self {
        if let OutputNode::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// The element kind, or `None` for text.
    pub fn kind(&self) -> Option<&str> {
        match self {
            OutputNode::Element { kind, .. } => Some(kind.as_str()),
            OutputNode::Text(_) => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            OutputNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            OutputNode::Text(_) => None,
        }
    }

    pub fn child_nodes(&self) -> &[OutputNode] {
        match self {
            OutputNode::Element { children, .. } => children.as_slice(),
            OutputNode::Text(_) => &[],
        }
    }
}

/// The rendered document: the sequence of top-level output nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutputTree {
    pub nodes: Vec<OutputNode>,
}

impl OutputTree {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serializes the tree to HTML markup.
    pub fn to_html(&self) -> String {
        html::to_html(&self.nodes)
    }
}
