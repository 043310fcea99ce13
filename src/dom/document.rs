// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document representation

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::element::Element;
use super::node::{Node, NodeData, NodeId, NodeStore, NodeType};
use super::selector::Selector;
use crate::error::Result;

/// HTML Document representation
#[derive(Debug, Clone)]
pub struct Document {
    /// Root node ID
    root_id: NodeId,
    /// Node storage
    pub(crate) nodes: NodeStore,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        let root_id = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(root_id, NodeData::document());

        Self {
            root_id,
            nodes: Arc::new(RwLock::new(nodes)),
        }
    }

    /// Get the root node
    pub fn root(&self) -> Node {
        Node::new(self.root_id, self.nodes.clone())
    }

    /// Query selector - find first matching element
    ///
    /// An unparsable selector matches nothing; use [`Document::select`] to
    /// surface the parse error.
    pub fn query_selector(&self, selector: &str) -> Option<Element> {
        let sel = Selector::parse(selector).ok()?;
        self.find_matching(&sel, false).into_iter().next()
    }

    /// Query selector all - find all matching elements in document order
    pub fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        Selector::parse(selector)
            .map(|sel| self.find_matching(&sel, true))
            .unwrap_or_default()
    }

    /// Find all elements matching a selector, failing on invalid syntax
    pub fn select(&self, selector: &str) -> Result<Vec<Element>> {
        let sel = Selector::parse(selector)?;
        Ok(self.find_matching(&sel, true))
    }

    /// Find matching elements
    fn find_matching(&self, selector: &Selector, find_all: bool) -> Vec<Element> {
        let mut results = Vec::new();
        let nodes = self.nodes.read();
        self.find_in_subtree(&nodes, self.root_id, selector, &mut results, find_all);
        results
    }

    /// Recursively find matching elements in subtree (pre-order)
    fn find_in_subtree(
        &self,
        nodes: &HashMap<NodeId, NodeData>,
        node_id: NodeId,
        selector: &Selector,
        results: &mut Vec<Element>,
        find_all: bool,
    ) {
        let Some(node_data) = nodes.get(&node_id) else {
            return;
        };

        if node_data.node_type == NodeType::Element {
            // matches() takes nested read locks on the store
            let node = Node::new(node_id, self.nodes.clone());
            if selector.matches(&node) {
                results.push(Element { node });
                if !find_all {
                    return;
                }
            }
        }

        for &child_id in &node_data.children {
            if !find_all && !results.is_empty() {
                return;
            }
            self.find_in_subtree(nodes, child_id, selector, results, find_all);
        }
    }

    /// Get the document's HTML
    pub fn outer_html(&self) -> String {
        self.root().outer_html()
    }

    /// Get all text content
    pub fn text_content(&self) -> String {
        self.root().text_content()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
