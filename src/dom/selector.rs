// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! CSS Selector parsing and matching
//!
//! Covers compound selectors built from a tag name and attribute selectors
//! (`[attr]`, `[attr=value]`, with the `i` flag) joined into a
//! comma-separated list. Combinators are rejected.

use crate::error::{Error, Result};

use super::node::Node;

/// A parsed, comma-separated selector list
#[derive(Debug, Clone)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

/// One compound selector: every part must match the same element
#[derive(Debug, Clone)]
struct Compound {
    parts: Vec<SelectorPart>,
}

/// A part of a selector
#[derive(Debug, Clone)]
pub enum SelectorPart {
    /// Tag name
    Tag(String),
    /// Attribute selector ([attr] or [attr=value])
    Attribute(AttributeSelector),
}

/// Attribute selector
#[derive(Debug, Clone)]
pub struct AttributeSelector {
    pub name: String,
    /// Exact value to match; `None` only checks presence
    pub value: Option<String>,
    pub case_insensitive: bool,
}

impl Selector {
    /// Parse a CSS selector string
    pub fn parse(selector: &str) -> Result<Self> {
        let trimmed = selector.trim();
        if trimmed.is_empty() {
            return Err(Error::selector(selector, "Empty selector"));
        }

        SelectorParser::new(trimmed)
            .parse()
            .map_err(|reason| Error::selector(selector, reason))
    }

    /// Check if a node matches any alternative of this selector
    pub fn matches(&self, node: &Node) -> bool {
        if !node.is_element() {
            return false;
        }
        self.alternatives
            .iter()
            .any(|c| c.parts.iter().all(|part| Self::part_matches(part, node)))
    }

    /// Check if a selector part matches
    fn part_matches(part: &SelectorPart, node: &Node) -> bool {
        match part {
            SelectorPart::Tag(tag) => node
                .local_name()
                .map(|n| n.eq_ignore_ascii_case(tag))
                .unwrap_or(false),
            SelectorPart::Attribute(attr) => Self::attribute_matches(attr, node),
        }
    }

    /// Check if attribute selector matches
    fn attribute_matches(attr: &AttributeSelector, node: &Node) -> bool {
        let Some(value) = node.get_attribute(&attr.name) else {
            return false;
        };

        match &attr.value {
            None => true,
            Some(target) if attr.case_insensitive => value.to_lowercase() == target.to_lowercase(),
            Some(target) => value == *target,
        }
    }
}

/// Simple selector parser
struct SelectorParser {
    input: Vec<char>,
    pos: usize,
}

type ParseResult<T> = std::result::Result<T, String>;

impl SelectorParser {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn parse(&mut self) -> ParseResult<Selector> {
        let mut alternatives = vec![self.parse_compound()?];

        loop {
            self.skip_whitespace();
            match self.advance() {
                None => break,
                Some(',') => {
                    self.skip_whitespace();
                    alternatives.push(self.parse_compound()?);
                }
                Some(c) => return Err(format!("Unsupported combinator '{}'", c)),
            }
        }

        Ok(Selector { alternatives })
    }

    fn parse_compound(&mut self) -> ParseResult<Compound> {
        let mut parts = Vec::new();

        while let Some(c) = self.peek() {
            match c {
                '[' => parts.push(SelectorPart::Attribute(self.parse_attribute()?)),
                c if c.is_alphabetic() || c == '_' || c == '-' => {
                    parts.push(SelectorPart::Tag(self.read_identifier()?.to_lowercase()));
                }
                ':' => return Err("Pseudo-classes are not supported".into()),
                '#' | '.' | '*' => return Err(format!("Unsupported selector '{}'", c)),
                _ => break,
            }
        }

        if parts.is_empty() {
            return Err("Expected a compound selector".into());
        }

        Ok(Compound { parts })
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        self.pos += 1;
        c
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> ParseResult<String> {
        let mut result = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                result.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if result.is_empty() {
            return Err("Expected identifier".into());
        }
        Ok(result)
    }

    fn parse_attribute(&mut self) -> ParseResult<AttributeSelector> {
        self.advance(); // consume '['

        self.skip_whitespace();
        let name = self.read_identifier()?;
        self.skip_whitespace();

        let mut value = None;
        let mut case_insensitive = false;

        if let Some(c) = self.peek() {
            if c != ']' {
                if c != '=' {
                    return Err(format!("Unsupported operator '{}'", c));
                }
                self.advance();

                self.skip_whitespace();
                value = Some(self.read_string_or_ident()?);
                self.skip_whitespace();

                if let Some('i') | Some('I') = self.peek() {
                    case_insensitive = true;
                    self.advance();
                    self.skip_whitespace();
                }
            }
        }

        self.expect(']')?;

        Ok(AttributeSelector {
            name,
            value,
            case_insensitive,
        })
    }

    fn read_string_or_ident(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.advance();
                let mut result = String::new();
                loop {
                    match self.advance() {
                        Some(c) if c == quote => break,
                        Some('\\') => {
                            if let Some(escaped) = self.advance() {
                                result.push(escaped);
                            }
                        }
                        Some(c) => result.push(c),
                        None => return Err("Unterminated string".into()),
                    }
                }
                Ok(result)
            }
            _ => self.read_identifier(),
        }
    }

    fn expect(&mut self, expected: char) -> ParseResult<()> {
        match self.advance() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(format!("Expected '{}', got '{}'", expected, c)),
            None => Err(format!("Expected '{}', got EOF", expected)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_selector_parsing() {
        assert!(Selector::parse("div").is_ok());
        assert!(Selector::parse("[attr]").is_ok());
        assert!(Selector::parse("[attr=value]").is_ok());
        assert!(Selector::parse("div[id='x'][class]").is_ok());
        assert!(Selector::parse("link[href], style, a[href]").is_ok());
        assert!(Selector::parse(r#"meta[http-equiv="Content-Security-Policy" i]"#).is_ok());
    }

    #[test]
    fn test_selector_errors() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("div p").is_err());
        assert!(Selector::parse("ul > li").is_err());
        assert!(Selector::parse("a:first-child").is_err());
        assert!(Selector::parse("[href").is_err());
        assert!(Selector::parse("[href='x").is_err());
        assert!(Selector::parse(".class").is_err());
        assert!(Selector::parse("div#id").is_err());
        assert!(Selector::parse("*").is_err());
        assert!(Selector::parse("[rel~=preload]").is_err());
    }

    #[test]
    fn test_case_insensitive_attribute() {
        let doc = parse_html(
            r#"<meta http-equiv="content-security-policy" content="default-src 'none'">"#,
        )
        .unwrap();
        assert!(doc
            .query_selector(r#"meta[http-equiv="Content-Security-Policy" i]"#)
            .is_some());
        assert!(doc
            .query_selector(r#"meta[http-equiv="Content-Security-Policy"]"#)
            .is_none());
    }

    #[test]
    fn test_selector_list_keeps_document_order() {
        let doc = parse_html(
            r#"<a href="/x">x</a><link rel="preload" href="f.woff2"><a href="/y">y</a>"#,
        )
        .unwrap();
        let found: Vec<String> = doc
            .query_selector_all("link[href], a[href]")
            .iter()
            .filter_map(|e| e.href())
            .collect();
        assert_eq!(found, vec!["/x", "f.woff2", "/y"]);
    }

    #[test]
    fn test_attribute_presence_and_value() {
        let doc = parse_html(r#"<a name="top">t</a><a href="/x">x</a>"#).unwrap();
        let found: Vec<String> = doc
            .query_selector_all("a[href]")
            .iter()
            .filter_map(|e| e.href())
            .collect();
        assert_eq!(found, vec!["/x"]);
        assert!(doc.query_selector("a[name=top]").is_some());
        assert!(doc.query_selector("a[name=TOP]").is_none());
        assert!(doc.query_selector("a[name=TOP i]").is_some());
    }
}
