// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Asset graph over a directory of static HTML
//!
//! - Load documents matching a glob pattern
//! - Follow same-origin anchors to reach linked pages
//! - Derive typed relations from each document's markup
//! - Write modified documents back to their store

mod asset;
mod content_type;
mod pattern;
mod relation;
mod store;

pub use asset::Asset;
pub use content_type::{for_extension, resolve_content_type, DEFAULT_CONTENT_TYPE};
pub use pattern::LoadPattern;
pub use relation::{is_under_root, resolve_href, Relation, RelationType};
pub use store::{AssetStore, FsStore, MemoryStore};

use url::Url;

use crate::dom::parse_html;
use crate::error::{ErrorContext, Result};

/// Extensions of files loaded as HTML documents
const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Collection of loaded HTML documents, in discovery order
pub struct AssetGraph<S: AssetStore> {
    root: Url,
    store: S,
    assets: Vec<Asset>,
}

impl<S: AssetStore> AssetGraph<S> {
    /// Create an empty graph over a store
    pub fn new(store: S) -> Self {
        Self {
            root: store.root_url().clone(),
            store,
            assets: Vec::new(),
        }
    }

    /// Site root URL
    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loaded documents in discovery order
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Mutable access to loaded documents
    pub fn assets_mut(&mut self) -> &mut [Asset] {
        &mut self.assets
    }

    /// Whether a document is already loaded
    pub fn contains(&self, url: &Url) -> bool {
        self.assets.iter().any(|a| a.url() == url)
    }

    /// Load every file whose root-relative path matches `pattern`
    ///
    /// Returns the number of newly loaded documents.
    pub async fn load_assets(&mut self, pattern: &LoadPattern) -> Result<usize> {
        let mut loaded = 0;

        for url in self.store.list().await? {
            let Some(relative) = self.relative_path(&url) else {
                continue;
            };
            if !pattern.matches(relative) || self.contains(&url) {
                continue;
            }
            self.load(url).await?;
            loaded += 1;
        }

        tracing::info!(pattern = pattern.as_str(), loaded, "Loaded documents");
        Ok(loaded)
    }

    /// Transitively load pages reached through same-origin `<a href>` links
    ///
    /// Cross-origin anchors are ignored. A same-origin anchor to a missing
    /// file is a broken link, not a load failure, and is skipped with a warning.
    pub async fn follow_same_origin_anchors(&mut self) -> Result<usize> {
        let mut loaded = 0;
        let mut index = 0;

        while index < self.assets.len() {
            let targets: Vec<Url> = self.assets[index]
                .outgoing_relations()
                .into_iter()
                .filter(|r| r.kind == RelationType::Anchor && !r.cross_origin)
                .filter_map(|r| r.target)
                .filter_map(|t| self.page_url(t))
                .collect();

            for target in targets {
                if self.contains(&target) {
                    continue;
                }
                if !self.store.exists(&target).await {
                    tracing::warn!(
                        from = %self.assets[index].url(),
                        to = %target,
                        "Skipping anchor to missing page"
                    );
                    continue;
                }
                self.load(target).await?;
                loaded += 1;
            }

            index += 1;
        }

        tracing::info!(loaded, "Followed same-origin anchors");
        Ok(loaded)
    }

    /// Write every dirty document back to the store
    pub async fn write_dirty(&mut self) -> Result<usize> {
        let mut written = 0;

        for asset in self.assets.iter_mut().filter(|a| a.is_dirty()) {
            self.store.write(asset.url(), &asset.to_html()).await?;
            asset.mark_clean();
            written += 1;
            tracing::debug!(url = %asset.url(), "Wrote document");
        }

        tracing::info!(written, "Wrote modified documents");
        Ok(written)
    }

    async fn load(&mut self, url: Url) -> Result<()> {
        let source = self.store.read(&url).await?;
        let document = parse_html(&source).loading(url.as_str())?;
        tracing::debug!(url = %url, "Loaded document");
        self.assets.push(Asset::new(url, self.root.clone(), document));
        Ok(())
    }

    fn relative_path<'a>(&self, url: &'a Url) -> Option<&'a str> {
        url.as_str().strip_prefix(self.root.as_str())
    }

    /// Map an anchor target to the HTML file that serves it
    fn page_url(&self, mut target: Url) -> Option<Url> {
        target.set_fragment(None);
        target.set_query(None);

        if target.path().ends_with('/') {
            target = target.join("index.html").ok()?;
        }

        let is_html = target
            .path_segments()
            .and_then(|mut s| s.next_back())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| HTML_EXTENSIONS.iter().any(|h| h.eq_ignore_ascii_case(ext)))
            .unwrap_or(false);

        (is_html && is_under_root(&target, &self.root)).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> MemoryStore {
        MemoryStore::new()
            .with_file("index.html", r#"<a href="guide/">Guide</a><a href="https://example.com/x.html">Ext</a>"#)
            .with_file("api.html", r#"<a href="/index.html#top">Home</a>"#)
            .with_file("guide/index.html", r#"<a href="deep.html?x=1#s">Deep</a><a href="missing.html">Broken</a>"#)
            .with_file("guide/deep.html", "<p>deep</p>")
            .with_file("guide/orphan.html", "<p>orphan</p>")
            .with_file("style.css", "p {}")
    }

    fn relative(graph: &AssetGraph<MemoryStore>) -> Vec<String> {
        graph
            .assets()
            .iter()
            .map(|a| a.url().as_str().trim_start_matches(graph.root().as_str()).to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_load_assets_by_pattern() {
        let mut graph = AssetGraph::new(site());
        let loaded = graph
            .load_assets(&LoadPattern::new("*.html").unwrap())
            .await
            .unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(relative(&graph), vec!["api.html", "index.html"]);

        // Loading again does not duplicate documents
        let again = graph
            .load_assets(&LoadPattern::new("**/*.html").unwrap())
            .await
            .unwrap();
        assert_eq!(again, 3);
        assert_eq!(graph.assets().len(), 5);
    }

    #[tokio::test]
    async fn test_follow_same_origin_anchors() {
        let mut graph = AssetGraph::new(site());
        graph
            .load_assets(&LoadPattern::new("*.html").unwrap())
            .await
            .unwrap();
        let followed = graph.follow_same_origin_anchors().await.unwrap();

        assert_eq!(followed, 2);
        assert_eq!(
            relative(&graph),
            vec!["api.html", "index.html", "guide/index.html", "guide/deep.html"]
        );
    }

    #[tokio::test]
    async fn test_write_dirty_only() {
        let mut graph = AssetGraph::new(site());
        graph
            .load_assets(&LoadPattern::new("*.html").unwrap())
            .await
            .unwrap();

        let asset = &mut graph.assets_mut()[1];
        let anchor = asset.outgoing_relations().remove(0);
        asset.detach(&anchor);

        assert_eq!(graph.write_dirty().await.unwrap(), 1);
        let written = graph.store().written();
        assert_eq!(written.len(), 1);
        assert!(written[0].as_str().ends_with("/index.html"));
        assert!(!graph.store().get("index.html").unwrap().contains("guide/"));

        // Nothing left to write
        assert_eq!(graph.write_dirty().await.unwrap(), 0);
    }
}
