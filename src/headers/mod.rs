// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Header extraction
//!
//! Turns `<meta http-equiv>` tags and resource hints into response header
//! lines keyed by public URL path, and removes the promoted markup.

mod config;
mod extractor;
mod link;
mod report;

pub use config::{
    hint_keyword, ExtractorConfig, CROSSORIGIN_AS_TYPE, DEFAULT_PATTERN, DEFAULT_ROOT,
    PROMOTED_META_HEADERS, PROMOTED_RESOURCE_HINTS, RESOURCE_HINT_KEYWORDS,
};
pub use extractor::{HeaderExtractor, RunSummary};
pub use link::LinkHeader;
pub use report::{public_path, HeaderMap, REPORT_TITLE};
