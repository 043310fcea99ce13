// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Glob patterns for selecting which documents to load

use regex::Regex;

use crate::error::{Error, Result};

/// A compiled glob matched against root-relative URL paths
///
/// `*` and `?` never cross a `/`; `**` does.
#[derive(Debug, Clone)]
pub struct LoadPattern {
    source: String,
    regex: Regex,
}

impl LoadPattern {
    /// Compile a glob such as `*.html` or `**/*.html`
    pub fn new(pattern: &str) -> Result<Self> {
        let trimmed = pattern.trim().trim_start_matches('/');
        if trimmed.is_empty() {
            return Err(Error::pattern(pattern, "Empty pattern"));
        }

        let regex = Regex::new(&glob_to_regex(trimmed))
            .map_err(|e| Error::pattern(pattern, e.to_string()))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as given
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check a root-relative path like `guide/index.html`
    pub fn matches(&self, relative: &str) -> bool {
        self.regex.is_match(relative)
    }
}

fn glob_to_regex(glob: &str) -> String {
    let mut out = String::from("^");
    let chars: Vec<char> = glob.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    out.push_str("(?:.*/)?");
                    i += 3;
                } else {
                    out.push_str(".*");
                    i += 2;
                }
                continue;
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            c => out.push_str(&regex::escape(&c.to_string())),
        }
        i += 1;
    }

    out.push('$');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_star_stays_in_directory() {
        let pattern = LoadPattern::new("*.html").unwrap();
        assert!(pattern.matches("index.html"));
        assert!(pattern.matches("api.html"));
        assert!(!pattern.matches("guide/index.html"));
        assert!(!pattern.matches("style.css"));
        assert!(!pattern.matches("index.html.bak"));
    }

    #[test]
    fn test_double_star_recurses() {
        let pattern = LoadPattern::new("**/*.html").unwrap();
        assert!(pattern.matches("index.html"));
        assert!(pattern.matches("guide/deep/index.html"));

        let pattern = LoadPattern::new("guide/**").unwrap();
        assert!(pattern.matches("guide/a/b.html"));
        assert!(!pattern.matches("api.html"));
    }

    #[test]
    fn test_literal_characters_escaped() {
        let pattern = LoadPattern::new("/page?.html").unwrap();
        assert!(pattern.matches("page1.html"));
        assert!(!pattern.matches("page1xhtml"));
        assert!(!pattern.matches("page/.html"));
        assert_eq!(pattern.as_str(), "/page?.html");
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(LoadPattern::new("  ").is_err());
    }
}
