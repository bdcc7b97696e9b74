// File: src/segment/mod.rs
// Purpose: Path segmenter - turns a file identifier into route segments and a file role

//! Identifier segmentation
//!
//! A file identifier such as `app\users\[id]\page.tsx` is split into:
//! - the raw folders it lives in (`users`, `[id]`), group folders included,
//! - the role selected by its file name (`page`),
//! - the route segments a router matches (`/`, `users`, `[id]`), with the
//!   role attached to the terminal one.
//!
//! Identifiers without a recognized role are plain folder chains. The
//! compiler is permissive here because the input set is filtered upstream.

pub mod pattern;

use serde::Serialize;

use crate::path::{normalize_identifier, strip_root};
pub use pattern::{classify_segment, is_group, SegmentKind, SegmentSlot};

/// Path token of the root route
pub const ROOT_PATH: &str = "/";

/// Role selected by a file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileRole {
    Page,
    Layout,
    Loading,
    Error,
    NotFound,
}

impl FileRole {
    /// Maps a file stem (name without extension) to its role
    pub fn from_stem(stem: &str) -> Option<Self> {
        match stem {
            "page" => Some(FileRole::Page),
            "layout" => Some(FileRole::Layout),
            "loading" => Some(FileRole::Loading),
            "error" => Some(FileRole::Error),
            "404" | "not-found" => Some(FileRole::NotFound),
            _ => None,
        }
    }

    /// The renderable role carried into the route tree, if any
    pub fn route_role(self) -> Option<RouteRole> {
        match self {
            FileRole::Page => Some(RouteRole::Page),
            FileRole::Layout => Some(RouteRole::Layout),
            _ => None,
        }
    }
}

/// Renderable role of a route node; pages and layouts are mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteRole {
    Page,
    Layout,
}

impl std::fmt::Display for RouteRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteRole::Page => f.write_str("page"),
            RouteRole::Layout => f.write_str("layout"),
        }
    }
}

/// One route segment: a path token, its kind, and the role of the file ending here
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSegment {
    pub token: String,
    pub kind: SegmentKind,
    pub role: Option<RouteRole>,
}

impl RouteSegment {
    /// The root segment `/`
    pub fn root() -> Self {
        Self {
            token: ROOT_PATH.to_string(),
            kind: SegmentKind::Static,
            role: None,
        }
    }

    /// A folder segment, classified from its token
    pub fn folder(token: &str) -> Self {
        Self {
            token: token.to_string(),
            kind: classify_segment(token),
            role: None,
        }
    }
}

/// A segmented file identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifier {
    /// Identifier exactly as discovered
    pub id: String,
    /// Raw folders below the root prefix, groups included
    pub folders: Vec<String>,
    /// Role selected by the file name
    pub role: Option<FileRole>,
    /// Route segments: root first, groups elided, role on the last one
    pub segments: Vec<RouteSegment>,
}

impl ParsedIdentifier {
    /// Key of the folder holding this file, e.g. `(shop)/cart`
    pub fn folder_key(&self) -> String {
        folder_key(&self.folders)
    }

    /// Route tokens below the root, e.g. `["users", "[id]"]`
    pub fn route_tokens(&self) -> Vec<&str> {
        self.segments
            .iter()
            .skip(1)
            .map(|segment| segment.token.as_str())
            .collect()
    }

    /// Route tokens joined with `/`, e.g. `users/[id]`
    pub fn route_key(&self) -> String {
        self.route_tokens().join("/")
    }

    /// Whether this file renders a page or a layout
    pub fn is_renderable(&self) -> bool {
        self.role.and_then(FileRole::route_role).is_some()
    }

    /// Number of group folders on the way to this file
    pub fn group_depth(&self) -> usize {
        self.folders.iter().filter(|folder| is_group(folder)).count()
    }

    /// Rank among files competing for one route key, lowest first
    ///
    /// Files outside group folders outrank grouped ones; ties fall back to
    /// the normalized identifier so the winner never depends on discovery order.
    pub fn precedence(&self) -> (usize, String) {
        (self.group_depth(), normalize_identifier(&self.id).into_owned())
    }
}

/// Joins raw folder names into a lookup key (`""` for the root folder)
pub fn folder_key<S: AsRef<str>>(folders: &[S]) -> String {
    folders
        .iter()
        .map(|folder| folder.as_ref())
        .collect::<Vec<_>>()
        .join("/")
}

/// Strips the final extension only: `page.tsx` → `page`, `page.test.tsx` → `page.test`
fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Parses a file identifier into folders, role and route segments (pure function)
///
/// # Examples
///
/// ```
/// use trellis_router::segment::{parse_identifier, FileRole, RouteRole};
///
/// let parsed = parse_identifier("app\\(shop)\\cart\\page", "app");
/// assert_eq!(parsed.folders, vec!["(shop)", "cart"]);
/// assert_eq!(parsed.role, Some(FileRole::Page));
/// assert_eq!(parsed.route_tokens(), vec!["cart"]);
/// assert_eq!(parsed.segments.last().unwrap().role, Some(RouteRole::Page));
///
/// let parsed = parse_identifier("./app/page.tsx", "app");
/// assert!(parsed.folders.is_empty());
/// assert_eq!(parsed.segments.len(), 1);
/// ```
pub fn parse_identifier(id: &str, root_prefix: &str) -> ParsedIdentifier {
    let normalized = normalize_identifier(id);
    let prefix = normalize_identifier(root_prefix);
    let relative = strip_root(&normalized, &prefix);

    let mut folders: Vec<String> = relative
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let role = folders
        .last()
        .and_then(|name| FileRole::from_stem(file_stem(name)));

    if role.is_some() {
        folders.pop();
    }

    let mut segments: Vec<RouteSegment> = std::iter::once(RouteSegment::root())
        .chain(
            folders
                .iter()
                .filter(|folder| !is_group(folder))
                .map(|folder| RouteSegment::folder(folder)),
        )
        .collect();

    if let Some(last) = segments.last_mut() {
        last.role = role.and_then(FileRole::route_role);
    }

    ParsedIdentifier {
        id: id.to_string(),
        folders,
        role,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_page() {
        let parsed = parse_identifier("app\\page", "app");
        assert_eq!(parsed.role, Some(FileRole::Page));
        assert_eq!(parsed.segments, vec![RouteSegment {
            token: "/".to_string(),
            kind: SegmentKind::Static,
            role: Some(RouteRole::Page),
        }]);
        assert_eq!(parsed.folder_key(), "");
        assert_eq!(parsed.route_key(), "");
    }

    #[test]
    fn test_nested_layout() {
        let parsed = parse_identifier("app/dashboard/settings/layout.tsx", "app");
        assert_eq!(parsed.role, Some(FileRole::Layout));
        assert_eq!(parsed.route_tokens(), vec!["dashboard", "settings"]);
        assert_eq!(parsed.segments[1].role, None);
        assert_eq!(parsed.segments[2].role, Some(RouteRole::Layout));
    }

    #[test]
    fn test_dynamic_token_kept_verbatim() {
        let parsed = parse_identifier("app\\users\\[id]\\page", "app");
        let last = parsed.segments.last().unwrap();
        assert_eq!(last.token, "[id]");
        assert_eq!(last.kind.param(), Some("id"));
    }

    #[test]
    fn test_groups_kept_in_folders_only() {
        let parsed = parse_identifier("app\\(marketing)\\contact\\page", "app");
        assert_eq!(parsed.folder_key(), "(marketing)/contact");
        assert_eq!(parsed.route_key(), "contact");
    }

    #[test]
    fn test_non_renderable_roles() {
        assert_eq!(parse_identifier("app/loading.tsx", "app").role, Some(FileRole::Loading));
        assert_eq!(parse_identifier("app/a/error", "app").role, Some(FileRole::Error));
        assert_eq!(parse_identifier("app/404.tsx", "app").role, Some(FileRole::NotFound));
        assert_eq!(parse_identifier("app/a/not-found", "app").role, Some(FileRole::NotFound));

        let parsed = parse_identifier("app/a/loading", "app");
        assert!(parsed.segments.iter().all(|s| s.role.is_none()));
        assert!(!parsed.is_renderable());
    }

    #[test]
    fn test_only_final_extension_is_stripped() {
        assert_eq!(parse_identifier("app/a/page.tsx", "app").role, Some(FileRole::Page));
        assert_eq!(parse_identifier("app/a/page.test.tsx", "app").role, None);
        assert_eq!(parse_identifier("app/a/layout.server.tsx", "app").role, None);
        assert_eq!(parse_identifier("app/a/.page", "app").role, None);

        let parsed = parse_identifier("app/a/page.test.tsx", "app");
        assert_eq!(parsed.route_tokens(), vec!["a", "page.test.tsx"]);
    }

    #[test]
    fn test_precedence_prefers_ungrouped_files() {
        let plain = parse_identifier("app\\error", "app");
        let grouped = parse_identifier("app\\(shop)\\error", "app");
        assert_eq!(plain.route_key(), grouped.route_key());
        assert_eq!(grouped.group_depth(), 1);
        assert!(plain.precedence() < grouped.precedence());

        let tsx = parse_identifier("./app/loading.tsx", "app");
        let jsx = parse_identifier("app\\loading.jsx", "app");
        assert!(jsx.precedence() < tsx.precedence());
    }

    #[test]
    fn test_unrecognized_role_is_folder_chain() {
        let parsed = parse_identifier("app/docs/readme", "app");
        assert_eq!(parsed.role, None);
        assert_eq!(parsed.folders, vec!["docs", "readme"]);
        assert_eq!(parsed.route_tokens(), vec!["docs", "readme"]);
    }

    #[test]
    fn test_identifier_outside_root_prefix() {
        let parsed = parse_identifier("pages/about/page", "app");
        assert_eq!(parsed.route_tokens(), vec!["pages", "about"]);
    }

    #[test]
    fn test_multi_component_prefix() {
        let parsed = parse_identifier("./src/app/blog/page.tsx", "src/app");
        assert_eq!(parsed.route_tokens(), vec!["blog"]);
    }
}
