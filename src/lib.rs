// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Hoist - Static Site Header Extraction
//!
//! Promotes security and performance hints embedded in generated HTML into
//! HTTP response headers for a static host.
//!
//! ## Features
//!
//! - `<meta http-equiv="Content-Security-Policy">` becomes a real header
//! - First same-origin stylesheet is preloaded via `Link`
//! - `preload`/`prefetch`/`preconnect` links move from markup to `Link` headers
//! - Pages reachable through same-origin anchors are processed too
//! - Only modified documents are written back
//!
//! ## Example
//!
//! ```rust,no_run
//! use hoist::{ExtractorConfig, FsStore, HeaderExtractor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractorConfig::new().root("public");
//!     let store = FsStore::new(&config.root)?;
//!
//!     let summary = HeaderExtractor::new(config)
//!         .run(store, &mut std::io::stdout())
//!         .await?;
//!
//!     for (path, lines) in summary.headers.iter() {
//!         println!("{} -> {} headers", path, lines.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod dom;
pub mod error;
pub mod graph;
pub mod headers;

// Re-exports for convenience

// DOM
pub use dom::{parse_html, Document, Element, Node};

// Errors
pub use error::{Error, ErrorContext, Result};

// Asset graph
pub use graph::{Asset, AssetGraph, AssetStore, FsStore, LoadPattern, MemoryStore};
pub use graph::{Relation, RelationType};

// Headers
pub use headers::{ExtractorConfig, HeaderExtractor, HeaderMap, LinkHeader, RunSummary};

/// Hoist version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
