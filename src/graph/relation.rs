// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Typed relations from a document to the resources it references

use std::fmt;

use url::Url;

use super::content_type::resolve_content_type;
use crate::dom::Element;

/// Kind of reference a document makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    /// `<link rel=stylesheet>` or inline `<style>`
    Stylesheet,
    /// `<link rel=preload>`
    PreloadLink,
    /// `<link rel=prefetch>`
    PrefetchLink,
    /// `<link rel=preconnect>`
    PreconnectLink,
    /// `<link rel=dns-prefetch>`
    DnsPrefetchLink,
    /// `<a href>`
    Anchor,
}

impl RelationType {
    /// Classify a `<link>` by its `rel` tokens
    pub fn from_link_rel(tokens: &[String]) -> Option<Self> {
        let has = |t: &str| tokens.iter().any(|tok| tok == t);

        if has("stylesheet") {
            Some(RelationType::Stylesheet)
        } else if has("preload") {
            Some(RelationType::PreloadLink)
        } else if has("prefetch") {
            Some(RelationType::PrefetchLink)
        } else if has("preconnect") {
            Some(RelationType::PreconnectLink)
        } else if has("dns-prefetch") {
            Some(RelationType::DnsPrefetchLink)
        } else {
            None
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationType::Stylesheet => "stylesheet",
            RelationType::PreloadLink => "preload link",
            RelationType::PrefetchLink => "prefetch link",
            RelationType::PreconnectLink => "preconnect link",
            RelationType::DnsPrefetchLink => "dns-prefetch link",
            RelationType::Anchor => "anchor",
        };
        f.write_str(name)
    }
}

/// An outgoing reference from a document
#[derive(Debug, Clone)]
pub struct Relation {
    /// Relation kind
    pub kind: RelationType,
    /// Href exactly as written in the document; `None` for inline content
    pub href: Option<String>,
    /// The `as` attribute of resource hints
    pub as_type: Option<String>,
    /// Target URL resolved against the document and site root
    pub target: Option<Url>,
    /// Target lies outside the site root
    pub cross_origin: bool,
    /// Resolved content type of the target
    pub content_type: String,
    /// The element carrying the relation
    pub(crate) element: Element,
}

impl Relation {
    /// Build a relation for `element` found in the document at `base`
    pub(crate) fn new(kind: RelationType, element: Element, base: &Url, root: &Url) -> Self {
        let href = match element.local_name().as_str() {
            "style" => None,
            _ => element.href(),
        };
        let target = href.as_deref().and_then(|h| resolve_href(h, base, root));
        // Inline content is same-origin; an unresolvable href is not
        let cross_origin = match (&href, &target) {
            (_, Some(t)) => !is_under_root(t, root),
            (Some(_), None) => true,
            (None, None) => false,
        };
        let content_type =
            resolve_content_type(element.get_attribute("type").as_deref(), target.as_ref());
        let as_type = element
            .get_attribute("as")
            .map(|a| a.trim().to_ascii_lowercase())
            .filter(|a| !a.is_empty());

        Self {
            kind,
            href,
            as_type,
            target,
            cross_origin,
            content_type,
            element,
        }
    }

    /// The relation's content is embedded in the document
    pub fn is_inline(&self) -> bool {
        self.href.is_none()
    }

    /// The element is still part of the document tree
    pub fn is_attached(&self) -> bool {
        self.element.is_attached()
    }
}

/// Resolve an href the way a static host serves it
///
/// Root-relative hrefs (`/x.css`) resolve against the site root rather than
/// the filesystem root; protocol-relative and absolute hrefs stay as they are.
pub fn resolve_href(href: &str, base: &Url, root: &Url) -> Option<Url> {
    let href = href.trim();
    if href.starts_with('/') && !href.starts_with("//") {
        root.join(href.trim_start_matches('/')).ok()
    } else {
        base.join(href).ok()
    }
}

/// Check whether `url` points inside the site root
pub fn is_under_root(url: &Url, root: &Url) -> bool {
    url.scheme() == root.scheme()
        && url.host_str() == root.host_str()
        && url.port_or_known_default() == root.port_or_known_default()
        && url.path().starts_with(root.path())
}
