// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Extractor configuration and the fixed promotion tables

use std::path::PathBuf;

use crate::graph::RelationType;

/// Site directory processed by the binary
pub const DEFAULT_ROOT: &str = "docs/_dist";

/// Documents loaded before anchors are followed
pub const DEFAULT_PATTERN: &str = "*.html";

/// `<meta http-equiv>` names promoted to response headers
pub const PROMOTED_META_HEADERS: &[&str] = &["Content-Security-Policy"];

/// `rel` keyword emitted for each resource-hint relation
pub const RESOURCE_HINT_KEYWORDS: &[(RelationType, &str)] = &[
    (RelationType::PreloadLink, "preload"),
    (RelationType::PrefetchLink, "prefetch"),
    (RelationType::PreconnectLink, "preconnect"),
    (RelationType::DnsPrefetchLink, "dns-prefetch"),
];

/// Resource hints promoted with their `as` and `type` parameters
pub const PROMOTED_RESOURCE_HINTS: &[RelationType] =
    &[RelationType::PreloadLink, RelationType::PrefetchLink];

/// `as` value that requires an anonymous CORS fetch
pub const CROSSORIGIN_AS_TYPE: &str = "font";

/// Look up the `rel` keyword of a resource-hint relation
pub fn hint_keyword(kind: RelationType) -> Option<&'static str> {
    RESOURCE_HINT_KEYWORDS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, keyword)| *keyword)
}

/// Header extractor configuration
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Directory holding the generated site
    pub root: PathBuf,
    /// Glob selecting the initial documents
    pub pattern: String,
    /// Meta header names to promote
    pub promoted_headers: Vec<String>,
    /// Load pages reachable through same-origin anchors
    pub follow_anchors: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            pattern: DEFAULT_PATTERN.to_string(),
            promoted_headers: PROMOTED_META_HEADERS.iter().map(|h| h.to_string()).collect(),
            follow_anchors: true,
        }
    }
}

impl ExtractorConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set site root
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set load pattern
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Add a meta header name to promote
    pub fn promote_header(mut self, name: impl Into<String>) -> Self {
        self.promoted_headers.push(name.into());
        self
    }

    /// Enable/disable anchor following
    pub fn follow_anchors(mut self, follow: bool) -> Self {
        self.follow_anchors = follow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.root, PathBuf::from("docs/_dist"));
        assert_eq!(config.pattern, "*.html");
        assert_eq!(config.promoted_headers, vec!["Content-Security-Policy"]);
        assert!(config.follow_anchors);
    }

    #[test]
    fn test_builder() {
        let config = ExtractorConfig::new()
            .root("public")
            .pattern("**/*.html")
            .promote_header("Referrer-Policy")
            .follow_anchors(false);

        assert_eq!(config.root, PathBuf::from("public"));
        assert_eq!(config.pattern, "**/*.html");
        assert_eq!(config.promoted_headers.len(), 2);
        assert!(!config.follow_anchors);
    }

    #[test]
    fn test_hint_keywords() {
        assert_eq!(hint_keyword(RelationType::PreloadLink), Some("preload"));
        assert_eq!(hint_keyword(RelationType::PrefetchLink), Some("prefetch"));
        assert_eq!(hint_keyword(RelationType::DnsPrefetchLink), Some("dns-prefetch"));
        assert_eq!(hint_keyword(RelationType::Stylesheet), None);
    }
}
