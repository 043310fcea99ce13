// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element-specific DOM operations

use super::node::Node;

/// Element node with extended operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Inner node reference
    pub node: Node,
}

impl Element {
    /// Create a new element from a node
    pub fn new(node: Node) -> Option<Self> {
        if node.is_element() {
            Some(Self { node })
        } else {
            None
        }
    }

    /// Get local name (lowercase)
    pub fn local_name(&self) -> String {
        self.node.local_name().unwrap_or_default()
    }

    /// Get href for links and anchors
    pub fn href(&self) -> Option<String> {
        self.get_attribute("href")
    }

    /// Space-separated `rel` tokens, lowercased
    pub fn rel_tokens(&self) -> Vec<String> {
        self.get_attribute("rel")
            .map(|r| r.split_ascii_whitespace().map(|t| t.to_ascii_lowercase()).collect())
            .unwrap_or_default()
    }

    /// Get parent element
    pub fn parent_element(&self) -> Option<Element> {
        self.node.parent().and_then(Element::new)
    }

    /// Get child elements (only element nodes)
    pub fn children(&self) -> Vec<Element> {
        self.node
            .children()
            .into_iter()
            .filter_map(Element::new)
            .collect()
    }
}

impl std::ops::Deref for Element {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}
