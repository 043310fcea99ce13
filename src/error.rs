// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for hoist
//!
//! Every failure that reaches the caller is fatal for the run. Missing
//! optional markup (no CSP meta, no stylesheet) is never an error.

use thiserror::Error;

/// Result type alias for hoist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hoist
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error without file context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A discovered document could not be read or parsed
    #[error("Failed to load {url}: {reason}")]
    Load { url: String, reason: String },

    /// A dirty document could not be written back
    #[error("Failed to write {url}: {reason}")]
    Write { url: String, reason: String },

    /// HTML parsing failed
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// Selector parsing error
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    /// Load pattern could not be compiled
    #[error("Invalid load pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// Root directory or URL is unusable
    #[error("Invalid root {root}: {reason}")]
    Root { root: String, reason: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a load error
    pub fn load(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Load {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a write error
    pub fn write(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Write {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a selector error
    pub fn selector(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Selector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Create a pattern error
    pub fn pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Pattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a root error
    pub fn root(root: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Root {
            root: root.into(),
            reason: reason.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Get the document URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Load { url, .. } | Error::Write { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Check if this failure happened while writing output
    pub fn is_write(&self) -> bool {
        matches!(self, Error::Write { .. })
    }
}

/// Helper trait for adding document context to errors
pub trait ErrorContext<T> {
    /// Turn the failure into a load error for `url`
    fn loading(self, url: &str) -> Result<T>;

    /// Turn the failure into a write error for `url`
    fn writing(self, url: &str) -> Result<T>;

    /// Add operation context to error
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn loading(self, url: &str) -> Result<T> {
        self.map_err(|e| match e.into() {
            Error::Io(io) => Error::load(url, io.to_string()),
            Error::HtmlParse(reason) => Error::load(url, reason),
            other => other,
        })
    }

    fn writing(self, url: &str) -> Result<T> {
        self.map_err(|e| match e.into() {
            Error::Io(io) => Error::write(url, io.to_string()),
            other => other,
        })
    }

    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            Error::Other(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = res.loading("file:///site/index.html").unwrap_err();

        assert!(matches!(err, Error::Load { .. }));
        assert_eq!(err.url(), Some("file:///site/index.html"));
        assert!(!err.is_write());
    }

    #[test]
    fn test_write_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        let err = res.writing("file:///site/a.html").unwrap_err();

        assert!(err.is_write());
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_context_keeps_other_errors() {
        let res: Result<()> = Err(Error::selector("meta[", "Expected ']'"));
        let err = res.loading("file:///x.html").unwrap_err();
        assert!(matches!(err, Error::Selector { .. }));

        let res: Result<()> = Err(Error::other("boom"));
        let err = res.context("extracting").unwrap_err();
        assert_eq!(err.to_string(), "extracting: boom");
    }
}
