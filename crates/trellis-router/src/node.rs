// File: src/node.rs
// Purpose: Route tree node model and its structural outline

use serde::Serialize;

use crate::lazy::{LazyRoute, LazyView};
use crate::segment::{RouteRole, SegmentKind, ROOT_PATH};

/// Path token of catch-all (not-found) nodes
pub const CATCH_ALL_PATH: &str = "*";

/// Everything needed to render a page or layout
#[derive(Debug, Clone)]
pub struct RenderSpec {
    /// Identifier of the file that declared it
    pub source: String,
    /// Component, data loader and action, resolved on first navigation
    pub route: LazyRoute,
    /// Shown while `route` resolves
    pub loading: LazyView,
}

/// What a node renders
#[derive(Debug, Clone)]
pub enum RouteContent {
    Page(RenderSpec),
    Layout(RenderSpec),
    /// Synthesized by the finalizer; carries no role
    NotFound(LazyView),
}

impl RouteContent {
    /// Wraps a render spec in the variant for `role`
    pub fn renderable(role: RouteRole, spec: RenderSpec) -> Self {
        match role {
            RouteRole::Page => RouteContent::Page(spec),
            RouteRole::Layout => RouteContent::Layout(spec),
        }
    }

    pub fn role(&self) -> Option<RouteRole> {
        match self {
            RouteContent::Page(_) => Some(RouteRole::Page),
            RouteContent::Layout(_) => Some(RouteRole::Layout),
            RouteContent::NotFound(_) => None,
        }
    }

    pub fn render_spec(&self) -> Option<&RenderSpec> {
        match self {
            RouteContent::Page(spec) | RouteContent::Layout(spec) => Some(spec),
            RouteContent::NotFound(_) => None,
        }
    }

    /// Short description for logs and errors: `page app/about/page`
    pub fn describe(&self) -> String {
        match self {
            RouteContent::Page(spec) => format!("page {}", spec.source),
            RouteContent::Layout(spec) => format!("layout {}", spec.source),
            RouteContent::NotFound(view) => format!("not-found {}", view.label()),
        }
    }
}

/// One addressable unit of the compiled route tree
///
/// Children are unique by `path` among non-index children, and at most one
/// child has `index == true`.
#[derive(Debug, Clone, Default)]
pub struct RouteNode {
    /// Segment this node matches; `None` for index nodes
    pub path: Option<String>,
    /// Matches the parent's path exactly
    pub index: bool,
    /// Set when `path` is a bracketed parameter
    pub dynamic: Option<SegmentKind>,
    pub content: Option<RouteContent>,
    /// Error boundary shown when this node or a descendant fails
    pub error: Option<LazyView>,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// A bare node matching `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// The tree root, matching `/`
    pub fn root() -> Self {
        Self::new(ROOT_PATH)
    }

    /// An index node rendering `content`
    pub fn index(content: RouteContent) -> Self {
        Self {
            index: true,
            content: Some(content),
            ..Default::default()
        }
    }

    /// A `*` node rendering the not-found view
    pub fn catch_all(view: LazyView) -> Self {
        Self {
            content: Some(RouteContent::NotFound(view)),
            ..Self::new(CATCH_ALL_PATH)
        }
    }

    pub fn with_content(mut self, content: RouteContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn role(&self) -> Option<RouteRole> {
        self.content.as_ref().and_then(RouteContent::role)
    }

    /// Present only when the node is a page or a layout
    pub fn render_spec(&self) -> Option<&RenderSpec> {
        self.content.as_ref().and_then(RouteContent::render_spec)
    }

    pub fn is_page(&self) -> bool {
        self.role() == Some(RouteRole::Page)
    }

    pub fn is_layout(&self) -> bool {
        self.role() == Some(RouteRole::Layout)
    }

    pub fn is_catch_all(&self) -> bool {
        !self.index && self.path.as_deref() == Some(CATCH_ALL_PATH)
    }

    /// Path for messages: index nodes read as `(index)`
    pub fn display_path(&self) -> &str {
        self.path.as_deref().unwrap_or("(index)")
    }

    pub fn index_child(&self) -> Option<&RouteNode> {
        self.children.iter().find(|child| child.index)
    }

    pub fn has_index_child(&self) -> bool {
        self.index_child().is_some()
    }

    /// Non-index child matching `path`
    pub fn child(&self, path: &str) -> Option<&RouteNode> {
        self.children
            .iter()
            .find(|child| !child.index && child.path.as_deref() == Some(path))
    }

    /// Descendant reached by following `paths` from this node
    pub fn descendant(&self, paths: &[&str]) -> Option<&RouteNode> {
        paths
            .iter()
            .try_fold(self, |node, path| node.child(path))
    }

    /// Number of nodes in this subtree, itself included
    pub fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(RouteNode::count_nodes).sum::<usize>()
    }

    /// Structural snapshot of this subtree
    pub fn outline(&self) -> RouteOutline {
        let spec = self.render_spec();

        RouteOutline {
            path: self.path.clone(),
            index: self.index,
            param: self
                .dynamic
                .as_ref()
                .and_then(|kind| kind.param())
                .map(str::to_string),
            content: self.content.as_ref().map(|content| match content {
                RouteContent::Page(_) => OutlineContent::Page,
                RouteContent::Layout(_) => OutlineContent::Layout,
                RouteContent::NotFound(_) => OutlineContent::NotFound,
            }),
            source: match &self.content {
                Some(RouteContent::NotFound(view)) => Some(view.label().to_string()),
                _ => spec.map(|spec| spec.source.clone()),
            },
            loading: spec.map(|spec| spec.loading.label().to_string()),
            error: self.error.as_ref().map(|view| view.label().to_string()),
            children: self.children.iter().map(RouteNode::outline).collect(),
        }
    }
}

/// Content kind as shown in an outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutlineContent {
    Page,
    Layout,
    NotFound,
}

/// Comparable, serializable snapshot of a route tree
///
/// Lazy modules are replaced by the identifiers they load, so two trees
/// built from the same files compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteOutline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub index: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<OutlineContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteOutline>,
}

impl RouteOutline {
    /// Canonical child order: index first, then by path, recursively
    ///
    /// Discovery order decides child order in the real tree; comparing
    /// sorted outlines checks structure only.
    pub fn sorted(mut self) -> Self {
        self.children = self
            .children
            .into_iter()
            .map(RouteOutline::sorted)
            .collect();
        self.children
            .sort_by(|a, b| (!a.index, &a.path, &a.source).cmp(&(!b.index, &b.path, &b.source)));
        self
    }

    /// Non-index child matching `path`
    pub fn child(&self, path: &str) -> Option<&RouteOutline> {
        self.children
            .iter()
            .find(|child| !child.index && child.path.as_deref() == Some(path))
    }

    pub fn index_child(&self) -> Option<&RouteOutline> {
        self.children.iter().find(|child| child.index)
    }
}
