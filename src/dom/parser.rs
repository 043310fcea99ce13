// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML parser using html5ever

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use super::document::Document;
use super::node::{DoctypeIds, NodeData, NodeId};
use crate::error::{Error, Result};

/// Parse HTML string into a Document
pub fn parse_html(html: &str) -> Result<Document> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: false,
            ..Default::default()
        },
        ..Default::default()
    };

    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| Error::HtmlParse(e.to_string()))?;

    let mut doc = Document::new();

    // Convert html5ever DOM to our DOM
    let root_id = doc.root().id;
    DomConverter::new(&mut doc).convert_children(&dom.document, root_id);

    Ok(doc)
}

/// Converts html5ever DOM to our DOM
struct DomConverter<'a> {
    doc: &'a mut Document,
}

impl<'a> DomConverter<'a> {
    fn new(doc: &'a mut Document) -> Self {
        Self { doc }
    }

    fn convert_children(&mut self, handle: &Handle, parent_id: NodeId) {
        for child in handle.children.borrow().iter() {
            self.convert_node(child, parent_id);
        }
    }

    fn convert_node(&mut self, handle: &Handle, parent_id: NodeId) {
        let node_data = match handle.data {
            RcNodeData::Document | RcNodeData::ProcessingInstruction { .. } => return,
            RcNodeData::Doctype {
                ref name,
                ref public_id,
                ref system_id,
            } => NodeData::doctype(
                name.to_string(),
                DoctypeIds {
                    public_id: public_id.to_string(),
                    system_id: system_id.to_string(),
                },
            ),
            RcNodeData::Text { ref contents } => NodeData::text(contents.borrow().to_string()),
            RcNodeData::Comment { ref contents } => NodeData::comment(contents.to_string()),
            RcNodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let mut data = NodeData::element(name.local.to_string());
                for attr in attrs.borrow().iter() {
                    let attr_name = match attr.name.prefix {
                        Some(ref prefix) => format!("{}:{}", prefix, attr.name.local),
                        None => attr.name.local.to_string(),
                    };
                    data.attributes.push((attr_name, attr.value.to_string()));
                }
                data
            }
        };

        let node_id = NodeId::new();
        let mut data = node_data;
        data.parent = Some(parent_id);

        {
            let mut nodes = self.doc.nodes.write();
            nodes.insert(node_id, data);
            if let Some(parent) = nodes.get_mut(&parent_id) {
                parent.children.push(node_id);
            }
        }

        // <template> children live in a separate fragment
        if let RcNodeData::Element {
            ref template_contents,
            ..
        } = handle.data
        {
            if let Some(ref contents) = *template_contents.borrow() {
                self.convert_children(contents, node_id);
            }
        }

        self.convert_children(handle, node_id);
    }
}
