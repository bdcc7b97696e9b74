//! Identifier utilities for validation and normalization
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

pub mod hierarchy;
pub use hierarchy::FolderHierarchy;

/// Checks whether an identifier is already in canonical form
///
/// # Rules
///
/// - Must not contain `\`, `//` or a `.` component
/// - Must not start or end with `/`
///
/// # Examples
///
/// ```
/// use trellis_router::path::is_canonical;
///
/// assert!(is_canonical(""));
/// assert!(is_canonical("app/about/page.tsx"));
///
/// assert!(!is_canonical("./app/page.tsx"));
/// assert!(!is_canonical("app\\page"));
/// assert!(!is_canonical("/app/page"));
/// assert!(!is_canonical("app//page"));
/// ```
pub fn is_canonical(id: &str) -> bool {
    if id.is_empty() {
        return true;
    }

    if id.contains('\\') || id.contains("//") {
        return false;
    }

    if id.starts_with('/') || id.ends_with('/') {
        return false;
    }

    !id.split('/').any(|component| component == ".")
}

/// Normalize a file identifier to `/`-separated canonical form
///
/// Returns `Cow::Borrowed` when the identifier is already canonical.
///
/// # Handles
///
/// - Backslash separators: `app\about\page` → `app/about/page`
/// - Relative markers: `./app/page.tsx` → `app/page.tsx`
/// - Empty segments and surrounding slashes: `/app//page/` → `app/page`
///
/// # Examples
///
/// ```
/// use trellis_router::path::normalize_identifier;
/// use std::borrow::Cow;
///
/// let id = normalize_identifier("app/about/page");
/// assert!(matches!(id, Cow::Borrowed("app/about/page")));
///
/// assert_eq!(normalize_identifier("app\\(marketing)\\contact\\page"), "app/(marketing)/contact/page");
/// assert_eq!(normalize_identifier("./app/page.tsx"), "app/page.tsx");
/// ```
pub fn normalize_identifier(id: &str) -> Cow<'_, str> {
    if is_canonical(id) {
        return Cow::Borrowed(id);
    }

    let normalized = id
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect::<Vec<_>>()
        .join("/");

    Cow::Owned(normalized)
}

/// Removes a leading root prefix (itself possibly multi-component) from a canonical identifier
///
/// Identifiers outside the prefix are returned unchanged.
///
/// # Examples
///
/// ```
/// use trellis_router::path::strip_root;
///
/// assert_eq!(strip_root("app/about/page", "app"), "about/page");
/// assert_eq!(strip_root("src/app/page", "src/app"), "page");
/// assert_eq!(strip_root("app", "app"), "");
/// assert_eq!(strip_root("application/page", "app"), "application/page");
/// ```
pub fn strip_root<'a>(id: &'a str, prefix: &str) -> &'a str {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        return id;
    }

    match id.strip_prefix(prefix) {
        Some("") => "",
        Some(rest) => rest.strip_prefix('/').unwrap_or(id),
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("app"));
        assert!(is_canonical("app/[id]/page.tsx"));

        assert!(!is_canonical("app/"));
        assert!(!is_canonical("app/./page"));
        assert!(!is_canonical("app\\page"));
    }

    #[test]
    fn test_normalize_borrowed_when_canonical() {
        let id = normalize_identifier("app/users/[id]/page");
        assert!(matches!(id, Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(normalize_identifier("app\\page"), "app/page");
        assert_eq!(normalize_identifier("app\\users\\[id]\\page"), "app/users/[id]/page");
    }

    #[test]
    fn test_normalize_mixed_separators() {
        assert_eq!(normalize_identifier(".\\app/about\\\\page"), "app/about/page");
        assert_eq!(normalize_identifier("/app/about/"), "app/about");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_identifier(""), "");
        assert_eq!(normalize_identifier("./"), "");
    }

    #[test]
    fn test_strip_root_empty_prefix() {
        assert_eq!(strip_root("about/page", ""), "about/page");
        assert_eq!(strip_root("about/page", "/"), "about/page");
    }
}
