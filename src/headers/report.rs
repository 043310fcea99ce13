// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-page header lines and the console report

use std::collections::HashMap;
use std::fmt;

use url::Url;

/// Title line of the report
pub const REPORT_TITLE: &str = "## Autogenerated headers:";

/// Header lines keyed by public URL path
///
/// Keys keep first-insertion order and lines keep append order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl HeaderMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines for `path`, creating an empty entry on first use
    pub fn entry(&mut self, path: impl Into<String>) -> &mut Vec<String> {
        let path = path.into();
        let idx = match self.index.get(&path) {
            Some(&idx) => idx,
            None => {
                self.entries.push((path.clone(), Vec::new()));
                self.index.insert(path, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Append one header line for `path`
    pub fn push(&mut self, path: impl Into<String>, line: impl Into<String>) {
        self.entry(path).push(line.into());
    }

    /// Lines recorded for `path`
    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.index.get(path).map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Paths in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(p, l)| (p.as_str(), l.as_slice()))
    }

    /// Number of paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No paths recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of header lines
    pub fn line_count(&self) -> usize {
        self.entries.iter().map(|(_, l)| l.len()).sum()
    }
}

impl fmt::Display for HeaderMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", REPORT_TITLE)?;
        writeln!(f)?;

        for (path, lines) in self.iter() {
            writeln!(f, "{}", path)?;
            for line in lines {
                writeln!(f, "  {}", line)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Public path of a document: root stripped, fragment dropped, trailing
/// `index.html` collapsed (`/guide/index.html` -> `/guide/`)
///
/// The suffix is stripped from any file name ending in `index.html`, so
/// `myindex.html` maps to `/my`.
pub fn public_path(root: &Url, url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);

    let full = url.as_str();
    let relative = full.strip_prefix(root.as_str()).unwrap_or(full);
    let relative = relative.strip_suffix("index.html").unwrap_or(relative);

    format!("/{}", relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_path() {
        let root = Url::parse("file:///srv/docs/_dist/").unwrap();
        let url = |p: &str| root.join(p).unwrap();

        assert_eq!(public_path(&root, &url("index.html")), "/");
        assert_eq!(public_path(&root, &url("guide/index.html")), "/guide/");
        assert_eq!(public_path(&root, &url("api.html#section")), "/api.html");
        assert_eq!(public_path(&root, &url("myindex.html.bak")), "/myindex.html.bak");
        assert_eq!(public_path(&root, &url("myindex.html")), "/my");
        assert_eq!(public_path(&root, &url("guide/myindex.html#x")), "/guide/my");
    }

    #[test]
    fn test_insertion_order() {
        let mut map = HeaderMap::new();
        map.push("/b/", "Link: <b.css>; rel=preload; as=style");
        map.entry("/a/");
        map.push("/b/", "Link: <https://x.example>; rel=preconnect");

        assert_eq!(map.paths().collect::<Vec<_>>(), vec!["/b/", "/a/"]);
        assert_eq!(map.get("/b/").unwrap().len(), 2);
        assert_eq!(map.get("/a/").unwrap().len(), 0);
        assert_eq!(map.line_count(), 2);
        assert!(map.get("/c/").is_none());
    }

    #[test]
    fn test_render() {
        let mut map = HeaderMap::new();
        map.push("/", "Content-Security-Policy: default-src 'self'");
        map.push("/", "Link: <main.css>; rel=preload; as=style");
        map.entry("/api.html");

        assert_eq!(
            map.to_string(),
            "\n## Autogenerated headers:\n\n\
             /\n  Content-Security-Policy: default-src 'self'\n  Link: <main.css>; rel=preload; as=style\n\n\
             /api.html\n\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(HeaderMap::new().to_string(), "\n## Autogenerated headers:\n\n");
    }
}
