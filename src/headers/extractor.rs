// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Promote meta tags and resource hints into response headers

use std::io::Write;

use super::config::{
    hint_keyword, ExtractorConfig, CROSSORIGIN_AS_TYPE, PROMOTED_RESOURCE_HINTS,
};
use super::link::LinkHeader;
use super::report::{public_path, HeaderMap};
use crate::error::Result;
use crate::graph::{Asset, AssetGraph, AssetStore, LoadPattern, Relation, RelationType};

/// Outcome of a full run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Derived header lines per page
    pub headers: HeaderMap,
    /// Documents rewritten on disk
    pub written: usize,
}

/// Derives HTTP headers from HTML documents and strips the promoted markup
#[derive(Debug, Clone, Default)]
pub struct HeaderExtractor {
    config: ExtractorConfig,
}

impl HeaderExtractor {
    /// Create an extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Load the site, print the report to `out`, then write modified documents
    ///
    /// Nothing is printed if discovery or extraction fails; a write failure
    /// after the report has been printed still fails the run.
    pub async fn run<S, W>(&self, store: S, out: &mut W) -> Result<RunSummary>
    where
        S: AssetStore,
        W: Write,
    {
        let pattern = LoadPattern::new(&self.config.pattern)?;
        let mut graph = AssetGraph::new(store);

        graph.load_assets(&pattern).await?;
        if self.config.follow_anchors {
            graph.follow_same_origin_anchors().await?;
        }

        let headers = self.extract(&mut graph)?;

        write!(out, "{}", headers)?;
        out.flush()?;

        let written = graph.write_dirty().await?;

        Ok(RunSummary { headers, written })
    }

    /// Build the header map for every loaded document, mutating them in place
    pub fn extract<S: AssetStore>(&self, graph: &mut AssetGraph<S>) -> Result<HeaderMap> {
        let root = graph.root().clone();
        let mut headers = HeaderMap::new();

        for asset in graph.assets_mut() {
            let path = public_path(&root, asset.url());
            let lines = headers.entry(path.clone());
            self.extract_asset(asset, lines)?;

            for line in lines.iter() {
                tracing::debug!(path = %path, header = %line, "Promoted header");
            }
        }

        tracing::info!(
            documents = headers.len(),
            headers = headers.line_count(),
            "Extracted headers"
        );
        Ok(headers)
    }

    /// Append the header lines of one document, in emission order
    pub fn extract_asset(&self, asset: &mut Asset, lines: &mut Vec<String>) -> Result<()> {
        self.promote_meta_headers(asset, lines)?;

        let relations = asset.outgoing_relations();

        if let Some(link) = critical_stylesheet(&relations) {
            lines.push(link.to_string());
        }

        for relation in relations
            .iter()
            .filter(|r| PROMOTED_RESOURCE_HINTS.contains(&r.kind))
        {
            if let Some(link) = resource_hint(relation) {
                lines.push(link.to_string());
                asset.detach(relation);
            }
        }

        for relation in relations
            .iter()
            .filter(|r| r.kind == RelationType::PreconnectLink)
        {
            if let Some(link) = preconnect(relation) {
                lines.push(link.to_string());
                asset.detach(relation);
            }
        }

        Ok(())
    }

    fn promote_meta_headers(&self, asset: &mut Asset, lines: &mut Vec<String>) -> Result<()> {
        for name in &self.config.promoted_headers {
            let Some(meta) = asset.query_meta_tag(name)? else {
                continue;
            };
            let value = meta.get_attribute("content").unwrap_or_default();
            lines.push(format!("{}: {}", name, value));
            asset.remove_node(&meta);
        }
        Ok(())
    }
}

/// Preload for the first same-origin stylesheet with a concrete href
fn critical_stylesheet(relations: &[Relation]) -> Option<LinkHeader> {
    relations
        .iter()
        .find(|r| r.kind == RelationType::Stylesheet && !r.cross_origin && !r.is_inline())
        .and_then(|r| r.href.as_deref())
        .map(|href| {
            LinkHeader::new(href)
                .param("rel", "preload")
                .param("as", "style")
        })
}

/// `Link` header for a preload/prefetch relation
fn resource_hint(relation: &Relation) -> Option<LinkHeader> {
    let href = relation.href.as_deref()?;
    let keyword = hint_keyword(relation.kind)?;

    let mut link = LinkHeader::new(href).param("rel", keyword);
    if let Some(as_type) = relation.as_type.as_deref() {
        link = link.param("as", as_type);
    }
    link = link.param("type", relation.content_type.as_str());

    if relation.as_type.as_deref() == Some(CROSSORIGIN_AS_TYPE) {
        link = link.param("crossorigin", "anonymous");
    }

    Some(link)
}

/// `Link` header for a preconnect relation
fn preconnect(relation: &Relation) -> Option<LinkHeader> {
    let href = relation.href.as_deref()?;
    let keyword = hint_keyword(relation.kind)?;
    Some(LinkHeader::new(href).param("rel", keyword))
}
