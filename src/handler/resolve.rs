//! Path resolution and route aliasing.
//!
//! Turns a raw request target into a working file path: the root path maps
//! to the default document, and extensionless paths are matched against the
//! configured alias table.

use crate::config::RouteAlias;

/// Derive the working file path from the raw request target.
///
/// `/` maps to the default document; every other target is returned
/// unchanged, leading slash and any query string included. No validation
/// happens here.
pub fn resolve_path(target: &str, default_document: &str) -> String {
    if target == "/" {
        default_document.to_string()
    } else {
        target.to_string()
    }
}

/// Extension of the last path segment, lowercased, leading dot included.
///
/// Empty when the segment has no dot, or when its only dot is the leading
/// character (dotfiles carry no extension). A trailing dot yields `"."`.
pub fn file_extension(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(pos) if pos > 0 => name[pos..].to_ascii_lowercase(),
        _ => String::new(),
    }
}

/// Look up an alias target for an extensionless path.
///
/// Alias names are stored bare; the request path carries a leading slash.
/// The table is scanned in order and the first match wins.
pub fn lookup_alias<'a>(path: &str, aliases: &'a [RouteAlias]) -> Option<&'a str> {
    let name = path.strip_prefix('/')?;
    aliases
        .iter()
        .find(|alias| alias.name == name)
        .map(|alias| alias.file.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alias(name: &str, file: &str) -> RouteAlias {
        RouteAlias {
            name: name.to_string(),
            file: file.to_string(),
        }
    }

    #[test]
    fn test_root_resolves_to_default_document() {
        assert_eq!(resolve_path("/", "index.html"), "index.html");
    }

    #[test]
    fn test_other_targets_pass_through_unchanged() {
        assert_eq!(resolve_path("/logo.png", "index.html"), "/logo.png");
        assert_eq!(resolve_path("/home", "index.html"), "/home");
        // Query strings are part of the target, verbatim.
        assert_eq!(resolve_path("/a.css?v=2", "index.html"), "/a.css?v=2");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("index.html"), ".html");
        assert_eq!(file_extension("/assets/logo.PNG"), ".png");
        assert_eq!(file_extension("/archive.tar.gz"), ".gz");
        assert_eq!(file_extension("/home"), "");
        assert_eq!(file_extension("/"), "");
    }

    #[test]
    fn test_file_extension_dot_edge_cases() {
        // A leading dot is a hidden file, not an extension.
        assert_eq!(file_extension("/.hidden"), "");
        assert_eq!(file_extension("/file."), ".");
        // The extension comes from the last segment only.
        assert_eq!(file_extension("/dir.d/file"), "");
    }

    #[test]
    fn test_alias_lookup_matches_bare_name() {
        let aliases = [alias("home", "home.html"), alias("docs", "docs.html")];
        assert_eq!(lookup_alias("/home", &aliases), Some("home.html"));
        assert_eq!(lookup_alias("/docs", &aliases), Some("docs.html"));
        assert_eq!(lookup_alias("/about", &aliases), None);
    }

    #[test]
    fn test_alias_lookup_first_match_wins() {
        let aliases = [alias("home", "home.html"), alias("home", "other.html")];
        assert_eq!(lookup_alias("/home", &aliases), Some("home.html"));
    }

    #[test]
    fn test_alias_lookup_requires_leading_slash() {
        let aliases = [alias("home", "home.html")];
        // A bare working path (e.g. the substituted default document) never
        // matches the table.
        assert_eq!(lookup_alias("home", &aliases), None);
    }
}
