// File: src/factory.rs
// Purpose: Route node factory - builds one single-branch subtree per route file

use crate::lazy::{LazyRoute, LazyView};
use crate::node::{RenderSpec, RouteContent, RouteNode};
use crate::segment::RouteSegment;

/// Lazy content of the file a branch is built from
#[derive(Debug, Clone)]
pub struct RouteSource {
    pub id: String,
    pub route: LazyRoute,
    /// Loading fallback already resolved by [`ViewIndex::find_loading`](crate::ViewIndex::find_loading)
    pub loading: LazyView,
}

impl RouteSource {
    pub fn new(id: impl Into<String>, route: LazyRoute, loading: LazyView) -> Self {
        Self {
            id: id.into(),
            route,
            loading,
        }
    }

    fn render_spec(&self) -> RenderSpec {
        RenderSpec {
            source: self.id.clone(),
            route: self.route.clone(),
            loading: self.loading.clone(),
        }
    }
}

/// Builds a linear chain of nodes from `segments` (pure function)
///
/// One node per segment, parent before child. Dynamic segments are flagged,
/// and a segment carrying a role receives the render spec of `source`. An
/// empty segment list yields a bare root.
///
/// # Examples
///
/// ```
/// use trellis_router::factory::{create_route, RouteSource};
/// use trellis_router::lazy::{LazyRoute, LazyView};
/// use trellis_router::module::{builtin_loading, identity_middleware, page_importer, PageModule};
/// use trellis_router::segment::parse_identifier;
///
/// let parsed = parse_identifier("app/users/[id]/page", "app");
/// let importer = page_importer(|| async { anyhow::Ok(PageModule::placeholder("user")) });
/// let source = RouteSource::new(
///     &parsed.id,
///     LazyRoute::new(&parsed.id, importer, identity_middleware()),
///     LazyView::builtin(builtin_loading()),
/// );
///
/// let branch = create_route(&parsed.segments, &source);
/// let user = branch.descendant(&["users", "[id]"]).unwrap();
/// assert!(user.is_page());
/// assert!(user.dynamic.is_some());
/// ```
pub fn create_route(segments: &[RouteSegment], source: &RouteSource) -> RouteNode {
    segments
        .iter()
        .rev()
        .fold(None, |child: Option<RouteNode>, segment| {
            let mut node = RouteNode::new(segment.token.as_str());

            if segment.kind.is_dynamic() {
                node.dynamic = Some(segment.kind.clone());
            }

            if let Some(role) = segment.role {
                node.content = Some(RouteContent::renderable(role, source.render_spec()));
            }

            node.children.extend(child);
            Some(node)
        })
        .unwrap_or_else(RouteNode::root)
}
