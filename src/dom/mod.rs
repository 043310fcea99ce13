// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM engine for HTML parsing, querying and rewriting
//!
//! Provides a DOM-like interface built on top of html5ever. Documents can be
//! queried with simple CSS selectors, have nodes removed, and be serialized
//! back to HTML without disturbing the markup that was not touched.

mod document;
mod element;
mod node;
mod parser;
mod selector;

pub use document::Document;
pub use element::Element;
pub use node::{DoctypeIds, Node, NodeId, NodeType};
pub use parser::parse_html;
pub use selector::Selector;
