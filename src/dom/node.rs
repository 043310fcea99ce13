// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM Node types and HTML serialization

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Shared node storage of one document
pub(crate) type NodeStore = Arc<RwLock<HashMap<NodeId, NodeData>>>;

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children are written verbatim
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

/// Unique node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a new unique node ID
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node (like <div>, <p>, etc.)
    Element,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Document type node (<!DOCTYPE>)
    DocumentType,
}

/// Identifiers of a legacy doctype; empty when absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctypeIds {
    /// Formal public identifier
    pub public_id: String,
    /// System identifier (DTD URL)
    pub system_id: String,
}

/// Internal node data
#[derive(Debug)]
pub struct NodeData {
    /// Node type
    pub node_type: NodeType,
    /// Tag name (for elements), as produced by the parser
    pub tag_name: Option<String>,
    /// Text content (text/comment data, doctype name)
    pub text_content: Option<String>,
    /// Attributes in source order
    pub attributes: Vec<(String, String)>,
    /// Public and system identifiers (doctypes only)
    pub doctype_ids: Option<DoctypeIds>,
    /// Parent node ID
    pub parent: Option<NodeId>,
    /// Child node IDs
    pub children: Vec<NodeId>,
}

impl NodeData {
    fn with_type(node_type: NodeType) -> Self {
        Self {
            node_type,
            tag_name: None,
            text_content: None,
            attributes: Vec::new(),
            doctype_ids: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a new element node data
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            ..Self::with_type(NodeType::Element)
        }
    }

    /// Create a new text node data
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text_content: Some(content.into()),
            ..Self::with_type(NodeType::Text)
        }
    }

    /// Create a new comment node data
    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            text_content: Some(content.into()),
            ..Self::with_type(NodeType::Comment)
        }
    }

    /// Create a new doctype node data
    pub fn doctype(name: impl Into<String>, ids: DoctypeIds) -> Self {
        Self {
            text_content: Some(name.into()),
            doctype_ids: Some(ids),
            ..Self::with_type(NodeType::DocumentType)
        }
    }

    /// Create a new document node data
    pub fn document() -> Self {
        Self::with_type(NodeType::Document)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A reference to a node in the DOM tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Node ID
    pub id: NodeId,
    /// Reference to document's node storage
    nodes: NodeStore,
}

impl Node {
    /// Create a new node reference
    pub(crate) fn new(id: NodeId, nodes: NodeStore) -> Self {
        Self { id, nodes }
    }

    /// Get the node type
    pub fn node_type(&self) -> Option<NodeType> {
        self.nodes.read().get(&self.id).map(|n| n.node_type)
    }

    /// Get the tag name in lowercase
    pub fn local_name(&self) -> Option<String> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.tag_name.as_ref())
            .map(|t| t.to_ascii_lowercase())
    }

    /// Get text content
    pub fn text_content(&self) -> String {
        let nodes = self.nodes.read();
        let mut out = String::new();
        collect_text(&nodes, self.id, &mut out);
        out
    }

    /// Get an attribute value (names compare case-insensitively)
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.attribute(name).map(String::from))
    }

    /// Check if has an attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| n.attribute(name).is_some())
            .unwrap_or(false)
    }

    /// Get parent node
    pub fn parent(&self) -> Option<Node> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.parent)
            .map(|id| Node::new(id, self.nodes.clone()))
    }

    /// Get child nodes
    pub fn children(&self) -> Vec<Node> {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| {
                n.children
                    .iter()
                    .map(|&id| Node::new(id, self.nodes.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type() == Some(NodeType::Element)
    }

    /// Check if the node is still attached below a parent
    pub fn is_attached(&self) -> bool {
        self.parent().is_some()
    }

    /// Remove a child node
    pub fn remove_child(&self, child: &Node) -> bool {
        let mut nodes = self.nodes.write();

        let removed = match nodes.get_mut(&self.id) {
            Some(parent_data) => {
                let before = parent_data.children.len();
                parent_data.children.retain(|&id| id != child.id);
                parent_data.children.len() != before
            }
            None => false,
        };

        if removed {
            if let Some(child_data) = nodes.get_mut(&child.id) {
                child_data.parent = None;
            }
        }

        removed
    }

    /// Detach this node from its parent; returns false if it was already detached
    pub fn remove(&self) -> bool {
        match self.parent() {
            Some(parent) => parent.remove_child(self),
            None => false,
        }
    }

    /// Get outer HTML
    pub fn outer_html(&self) -> String {
        let nodes = self.nodes.read();
        let mut out = String::new();
        serialize_node(&nodes, self.id, &mut out);
        out
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn collect_text(nodes: &HashMap<NodeId, NodeData>, node_id: NodeId, out: &mut String) {
    let Some(node) = nodes.get(&node_id) else {
        return;
    };
    match node.node_type {
        NodeType::Text => out.push_str(node.text_content.as_deref().unwrap_or("")),
        NodeType::Element | NodeType::Document => {
            for &child in &node.children {
                collect_text(nodes, child, out);
            }
        }
        _ => {}
    }
}

/// Serialize a node to HTML, following the HTML fragment serialization rules
fn serialize_node(nodes: &HashMap<NodeId, NodeData>, node_id: NodeId, out: &mut String) {
    let Some(node) = nodes.get(&node_id) else {
        return;
    };

    match node.node_type {
        NodeType::Text => {
            let text = node.text_content.as_deref().unwrap_or("");
            let raw = node
                .parent
                .and_then(|p| nodes.get(&p))
                .and_then(|p| p.tag_name.as_deref())
                .map(|t| RAW_TEXT_ELEMENTS.contains(&t.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if raw {
                out.push_str(text);
            } else {
                escape_into(text, false, out);
            }
        }
        NodeType::Comment => {
            out.push_str("<!--");
            out.push_str(node.text_content.as_deref().unwrap_or(""));
            out.push_str("-->");
        }
        NodeType::DocumentType => {
            out.push_str("<!DOCTYPE ");
            out.push_str(node.text_content.as_deref().unwrap_or("html"));
            if let Some(ids) = &node.doctype_ids {
                if !ids.public_id.is_empty() {
                    out.push_str(" PUBLIC \"");
                    out.push_str(&ids.public_id);
                    out.push('"');
                    if !ids.system_id.is_empty() {
                        out.push_str(" \"");
                        out.push_str(&ids.system_id);
                        out.push('"');
                    }
                } else if !ids.system_id.is_empty() {
                    out.push_str(" SYSTEM \"");
                    out.push_str(&ids.system_id);
                    out.push('"');
                }
            }
            out.push('>');
        }
        NodeType::Element => {
            let tag = node.tag_name.as_deref().unwrap_or("div");
            out.push('<');
            out.push_str(tag);
            for (name, value) in &node.attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
            out.push('>');

            let lower = tag.to_ascii_lowercase();
            if VOID_ELEMENTS.contains(&lower.as_str()) {
                return;
            }

            // The parser drops one leading newline in these elements
            if matches!(lower.as_str(), "pre" | "textarea" | "listing") {
                let leading_newline = node
                    .children
                    .first()
                    .and_then(|c| nodes.get(c))
                    .filter(|c| c.node_type == NodeType::Text)
                    .and_then(|c| c.text_content.as_deref())
                    .map(|t| t.starts_with('\n'))
                    .unwrap_or(false);
                if leading_newline {
                    out.push('\n');
                }
            }

            for &child in &node.children {
                serialize_node(nodes, child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        NodeType::Document => {
            for &child in &node.children {
                serialize_node(nodes, child, out);
            }
        }
    }
}

/// Escape text or attribute values
fn escape_into(s: &str, attr_mode: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            '"' if attr_mode => out.push_str("&quot;"),
            '<' if !attr_mode => out.push_str("&lt;"),
            '>' if !attr_mode => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_node_id() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_node_data() {
        let element = NodeData::element("div");
        assert_eq!(element.tag_name, Some("div".to_string()));
        assert_eq!(element.node_type, NodeType::Element);

        let text = NodeData::text("Hello");
        assert_eq!(text.text_content, Some("Hello".to_string()));
        assert_eq!(text.node_type, NodeType::Text);
    }

    #[test]
    fn test_escaping() {
        let doc = parse_html(r#"<p title="a &quot;b&quot; &amp; c">1 &lt; 2 &amp;&amp; 3 &gt; 2</p>"#)
            .unwrap();
        let p = doc.query_selector("p").unwrap();
        assert_eq!(p.get_attribute("title").as_deref(), Some(r#"a "b" & c"#));
        assert_eq!(
            p.outer_html(),
            r#"<p title="a &quot;b&quot; &amp; c">1 &lt; 2 &amp;&amp; 3 &gt; 2</p>"#
        );
    }

    #[test]
    fn test_raw_text_not_escaped() {
        let doc = parse_html("<script>if (a < b && c) {}</script><style>a > b {}</style>").unwrap();
        let html = doc.outer_html();
        assert!(html.contains("<script>if (a < b && c) {}</script>"));
        assert!(html.contains("<style>a > b {}</style>"));
    }

    #[test]
    fn test_attribute_order_preserved() {
        let doc = parse_html(r#"<link rel="stylesheet" href="a.css" media="all">"#).unwrap();
        let link = doc.query_selector("link").unwrap();
        assert_eq!(
            link.outer_html(),
            r#"<link rel="stylesheet" href="a.css" media="all">"#
        );
    }

    #[test]
    fn test_remove() {
        let doc = parse_html("<div><span>a</span><b>b</b></div>").unwrap();
        let span = doc.query_selector("span").unwrap();
        assert!(span.is_attached());
        assert!(span.remove());
        assert!(!span.is_attached());
        assert!(!span.remove());
        assert_eq!(doc.query_selector("div").unwrap().outer_html(), "<div><b>b</b></div>");
    }
}
