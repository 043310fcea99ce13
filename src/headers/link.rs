// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! `Link` header lines (RFC 8288)

use std::fmt;

/// One `Link: <target>; param=value...` header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHeader {
    target: String,
    params: Vec<(String, String)>,
}

impl LinkHeader {
    /// Start a link to `target`, written verbatim between angle brackets
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter; parameters keep insertion order
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Link target
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for LinkHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Link: <{}>", self.target)?;
        for (name, value) in &self.params {
            write!(f, "; {}={}", name, value)?;
        }
        Ok(())
    }
}
