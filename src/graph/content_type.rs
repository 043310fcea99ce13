// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Content type resolution for relation targets

use url::Url;

/// Used when neither a `type` attribute nor a known extension is available
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// File extension to content type
const EXTENSION_TYPES: &[(&str, &str)] = &[
    // Fonts
    ("woff2", "font/woff2"),
    ("woff", "font/woff"),
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
    ("eot", "application/vnd.ms-fontobject"),
    // Styles and scripts
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("mjs", "application/javascript"),
    ("json", "application/json"),
    ("map", "application/json"),
    ("wasm", "application/wasm"),
    // Documents
    ("html", "text/html"),
    ("htm", "text/html"),
    ("xml", "application/xml"),
    ("txt", "text/plain"),
    ("pdf", "application/pdf"),
    // Images
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("webp", "image/webp"),
    ("avif", "image/avif"),
    ("ico", "image/x-icon"),
    // Media
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("mp3", "audio/mpeg"),
    ("ogg", "audio/ogg"),
];

/// Resolve the content type of a relation target
///
/// An explicit `type` attribute wins, then `data:` media types, then the
/// file extension of the target path.
pub fn resolve_content_type(type_attr: Option<&str>, target: Option<&Url>) -> String {
    if let Some(explicit) = type_attr.map(str::trim).filter(|t| !t.is_empty()) {
        return explicit.to_string();
    }

    let Some(target) = target else {
        return DEFAULT_CONTENT_TYPE.to_string();
    };

    if target.scheme() == "data" {
        let media = target
            .path()
            .split([';', ','])
            .next()
            .unwrap_or("")
            .trim();
        return if media.is_empty() {
            // RFC 2397 default
            "text/plain".to_string()
        } else {
            media.to_ascii_lowercase()
        };
    }

    target
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .and_then(|ext| for_extension(&ext))
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string()
}

/// Look up a content type by file extension (without the dot)
pub fn for_extension(ext: &str) -> Option<&'static str> {
    EXTENSION_TYPES
        .iter()
        .find(|(e, _)| e.eq_ignore_ascii_case(ext))
        .map(|(_, t)| *t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_extension_lookup() {
        let target = url("file:///site/fonts/Inter.WOFF2");
        assert_eq!(resolve_content_type(None, Some(&target)), "font/woff2");

        let target = url("https://cdn.example.com/app.js?v=3#x");
        assert_eq!(
            resolve_content_type(None, Some(&target)),
            "application/javascript"
        );
    }

    #[test]
    fn test_type_attribute_wins() {
        let target = url("file:///site/font.bin");
        assert_eq!(
            resolve_content_type(Some(" font/woff2 "), Some(&target)),
            "font/woff2"
        );
        assert_eq!(
            resolve_content_type(Some(""), Some(&target)),
            DEFAULT_CONTENT_TYPE
        );
    }

    #[test]
    fn test_data_url() {
        let target = url("data:image/PNG;base64,AAAA");
        assert_eq!(resolve_content_type(None, Some(&target)), "image/png");

        let target = url("data:,hello");
        assert_eq!(resolve_content_type(None, Some(&target)), "text/plain");
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(resolve_content_type(None, None), DEFAULT_CONTENT_TYPE);
        let target = url("file:///site/LICENSE");
        assert_eq!(resolve_content_type(None, Some(&target)), DEFAULT_CONTENT_TYPE);
    }
}
