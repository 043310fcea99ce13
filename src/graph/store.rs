// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Storage backends the asset graph reads documents from and writes them to

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use url::Url;
use walkdir::WalkDir;

use crate::error::{Error, ErrorContext, Result};

/// Where documents live
///
/// Every URL handed to or returned from a store lies below [`AssetStore::root_url`].
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Directory URL of the site root, always ending in `/`
    fn root_url(&self) -> &Url;

    /// All files below the root, sorted by URL
    async fn list(&self) -> Result<Vec<Url>>;

    /// Whether a file exists at `url`
    async fn exists(&self, url: &Url) -> bool;

    /// Read a file as UTF-8 text
    async fn read(&self, url: &Url) -> Result<String>;

    /// Replace a file's contents
    async fn write(&self, url: &Url, contents: &str) -> Result<()>;
}

#[async_trait]
impl<S: AssetStore + ?Sized> AssetStore for std::sync::Arc<S> {
    fn root_url(&self) -> &Url {
        (**self).root_url()
    }

    async fn list(&self) -> Result<Vec<Url>> {
        (**self).list().await
    }

    async fn exists(&self, url: &Url) -> bool {
        (**self).exists(url).await
    }

    async fn read(&self, url: &Url) -> Result<String> {
        (**self).read(url).await
    }

    async fn write(&self, url: &Url, contents: &str) -> Result<()> {
        (**self).write(url, contents).await
    }
}

/// Store backed by a directory on disk
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
    root_url: Url,
}

impl FsStore {
    /// Open a directory as the site root
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let given = root.as_ref();
        let root = std::fs::canonicalize(given)
            .map_err(|e| Error::root(given.display().to_string(), e.to_string()))?;

        if !root.is_dir() {
            return Err(Error::root(root.display().to_string(), "not a directory"));
        }

        let root_url = Url::from_directory_path(&root)
            .map_err(|_| Error::root(root.display().to_string(), "not an absolute path"))?;

        Ok(Self { root, root_url })
    }

    /// Canonical root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, url: &Url) -> Result<PathBuf> {
        url.to_file_path()
            .map_err(|_| Error::other(format!("{} is not a file URL", url)))
    }
}

#[async_trait]
impl AssetStore for FsStore {
    fn root_url(&self) -> &Url {
        &self.root_url
    }

    async fn list(&self) -> Result<Vec<Url>> {
        let mut urls = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(std::io::Error::from).context("scanning site root")?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(url) = Url::from_file_path(entry.path()) {
                urls.push(url);
            }
        }

        urls.sort();
        Ok(urls)
    }

    async fn exists(&self, url: &Url) -> bool {
        match self.path_for(url) {
            Ok(path) => tokio::fs::metadata(path)
                .await
                .map(|m| m.is_file())
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn read(&self, url: &Url) -> Result<String> {
        let path = self.path_for(url)?;
        tokio::fs::read_to_string(path).await.loading(url.as_str())
    }

    async fn write(&self, url: &Url, contents: &str) -> Result<()> {
        let path = self.path_for(url)?;
        tokio::fs::write(path, contents).await.writing(url.as_str())
    }
}

/// In-memory store, for driving the graph without touching disk
#[derive(Debug)]
pub struct MemoryStore {
    root_url: Url,
    files: RwLock<BTreeMap<Url, String>>,
    writes: RwLock<Vec<Url>>,
}

impl MemoryStore {
    /// Empty store rooted at `file:///site/`
    pub fn new() -> Self {
        Self {
            root_url: Url::parse("file:///site/").expect("static URL is valid"),
            files: RwLock::new(BTreeMap::new()),
            writes: RwLock::new(Vec::new()),
        }
    }

    /// Add a file at a root-relative path
    pub fn with_file(self, path: &str, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add or replace a file at a root-relative path
    pub fn insert(&self, path: &str, contents: impl Into<String>) {
        if let Ok(url) = self.root_url.join(path.trim_start_matches('/')) {
            self.files.write().insert(url, contents.into());
        }
    }

    /// Current contents of a root-relative path
    pub fn get(&self, path: &str) -> Option<String> {
        let url = self.root_url.join(path.trim_start_matches('/')).ok()?;
        self.files.read().get(&url).cloned()
    }

    /// URLs written so far, in write order
    pub fn written(&self) -> Vec<Url> {
        self.writes.read().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetStore for MemoryStore {
    fn root_url(&self) -> &Url {
        &self.root_url
    }

    async fn list(&self) -> Result<Vec<Url>> {
        Ok(self.files.read().keys().cloned().collect())
    }

    async fn exists(&self, url: &Url) -> bool {
        self.files.read().contains_key(url)
    }

    async fn read(&self, url: &Url) -> Result<String> {
        self.files
            .read()
            .get(url)
            .cloned()
            .ok_or_else(|| Error::load(url.as_str(), "no such file"))
    }

    async fn write(&self, url: &Url, contents: &str) -> Result<()> {
        self.files.write().insert(url.clone(), contents.to_string());
        self.writes.write().push(url.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fs_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("guide")).unwrap();
        std::fs::write(dir.path().join("index.html"), "<p>home</p>").unwrap();
        std::fs::write(dir.path().join("guide").join("index.html"), "<p>guide</p>").unwrap();

        let store = FsStore::new(dir.path()).unwrap();
        assert!(store.root_url().as_str().ends_with('/'));

        let urls = store.list().await.unwrap();
        let relative: Vec<String> = urls
            .iter()
            .map(|u| u.as_str().trim_start_matches(store.root_url().as_str()).to_string())
            .collect();
        assert_eq!(relative, vec!["guide/index.html", "index.html"]);

        let home = store.root_url().join("index.html").unwrap();
        assert!(store.exists(&home).await);
        assert_eq!(store.read(&home).await.unwrap(), "<p>home</p>");

        store.write(&home, "<p>new</p>").await.unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("index.html")).unwrap(),
            "<p>new</p>"
        );

        let missing = store.root_url().join("nope.html").unwrap();
        assert!(!store.exists(&missing).await);
        let err = store.read(&missing).await.unwrap_err();
        assert_eq!(err.url(), Some(missing.as_str()));
    }

    #[test]
    fn test_fs_store_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsStore::new(dir.path().join("does-not-exist")).unwrap_err();
        assert!(matches!(err, Error::Root { .. }));
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new().with_file("/a.html", "<p>a</p>");
        let url = store.root_url().join("a.html").unwrap();

        assert!(store.exists(&url).await);
        store.write(&url, "<p>b</p>").await.unwrap();
        assert_eq!(store.get("a.html").as_deref(), Some("<p>b</p>"));
        assert_eq!(store.written(), vec![url]);
    }
}
