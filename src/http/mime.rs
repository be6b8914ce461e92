//! MIME type lookup.
//!
//! Maps a lowercase file extension (leading dot included) to the
//! Content-Type header value.

/// Get the Content-Type for a file extension.
///
/// Extensions outside the table, including the empty extension, fall back
/// to `text/plain`.
pub fn content_type(extension: &str) -> &'static str {
    match extension {
        ".html" => "text/html",
        ".css" => "text/css",
        ".js" => "text/javascript",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".png" => "image/png",
        _ => "text/plain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_extensions() {
        assert_eq!(content_type(".html"), "text/html");
        assert_eq!(content_type(".css"), "text/css");
        assert_eq!(content_type(".js"), "text/javascript");
        assert_eq!(content_type(".jpg"), "image/jpeg");
        assert_eq!(content_type(".jpeg"), "image/jpeg");
        assert_eq!(content_type(".gif"), "image/gif");
        assert_eq!(content_type(".png"), "image/png");
    }

    #[test]
    fn test_unmapped_extension_defaults_to_plain_text() {
        assert_eq!(content_type(".xyz"), "text/plain");
        assert_eq!(content_type(".ico"), "text/plain");
        assert_eq!(content_type(""), "text/plain");
    }

    #[test]
    fn test_lookup_is_exact() {
        // The table is keyed on lowercase dotted extensions only.
        assert_eq!(content_type("html"), "text/plain");
        assert_eq!(content_type(".HTML"), "text/plain");
    }
}
