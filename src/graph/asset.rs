// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! A loaded HTML document and the operations the extractor performs on it

use url::Url;

use super::relation::{Relation, RelationType};
use crate::dom::{Document, Element};
use crate::error::Result;

/// Elements that can carry an outgoing relation
const RELATION_SELECTOR: &str = "link[href], style, a[href]";

/// One HTML document loaded from the site root
#[derive(Debug, Clone)]
pub struct Asset {
    url: Url,
    root: Url,
    document: Document,
    dirty: bool,
}

impl Asset {
    /// Wrap a parsed document found at `url` below `root`
    pub fn new(url: Url, root: Url, document: Document) -> Self {
        Self {
            url,
            root,
            document,
            dirty: false,
        }
    }

    /// Document URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Parsed document tree
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Whether the document changed since it was loaded or last written
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flag the document for writing
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Find the first `<meta http-equiv>` tag for a header name
    ///
    /// `http-equiv` values compare case-insensitively, as browsers do.
    pub fn query_meta_tag(&self, header_name: &str) -> Result<Option<Element>> {
        let selector = format!(
            r#"meta[http-equiv="{}" i]"#,
            header_name.replace('\\', "\\\\").replace('"', "\\\"")
        );
        Ok(self.document.select(&selector)?.into_iter().next())
    }

    /// Remove an element from the tree; marks the document dirty if it was attached
    pub fn remove_node(&mut self, element: &Element) -> bool {
        let removed = element.remove();
        if removed {
            self.mark_dirty();
        }
        removed
    }

    /// Outgoing relations in document order
    pub fn outgoing_relations(&self) -> Vec<Relation> {
        self.document
            .query_selector_all(RELATION_SELECTOR)
            .into_iter()
            .filter_map(|element| {
                let kind = match element.local_name().as_str() {
                    "a" => RelationType::Anchor,
                    "style" => RelationType::Stylesheet,
                    _ => RelationType::from_link_rel(&element.rel_tokens())?,
                };
                Some(Relation::new(kind, element, &self.url, &self.root))
            })
            .collect()
    }

    /// Remove the element carrying `relation`
    pub fn detach(&mut self, relation: &Relation) -> bool {
        self.remove_node(&relation.element)
    }

    /// Serialize the current tree
    pub fn to_html(&self) -> String {
        self.document.outer_html()
    }
}
