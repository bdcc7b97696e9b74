// File: src/finalize.rs
// Purpose: Tree finalizer - not-found injection and error boundary attachment

use crate::error::{Result, RouteError};
use crate::fallback::NotFoundViews;
use crate::lazy::LazyView;
use crate::node::{RouteContent, RouteNode};

/// Injects not-found routes into a merged tree
///
/// - A root without children has its content moved into an index child.
/// - Every node with children gets a trailing `*` child unless it has one.
/// - Every non-root node with children but no index child, whose path holds
///   no `/` or `?`, gets an index child rendering the not-found view.
///
/// Each node renders the nearest not-found view at or above its route path.
/// The pass never fails, and running it again adds nothing.
pub fn add_not_found(mut root: RouteNode, views: &NotFoundViews) -> RouteNode {
    if root.children.is_empty() {
        if let Some(content) = root.content.take() {
            root.children.push(RouteNode::index(content));
        }
    }

    let mut route = Vec::new();
    inject(&mut root, &mut route, views, true);

    if !root.children.iter().any(RouteNode::is_catch_all) {
        root.children.push(RouteNode::catch_all(views.nearest("")));
    }

    root
}

fn inject(node: &mut RouteNode, route: &mut Vec<String>, views: &NotFoundViews, is_root: bool) {
    if node.children.is_empty() {
        return;
    }

    for child in node
        .children
        .iter_mut()
        .filter(|child| !child.index && !child.is_catch_all())
    {
        route.push(child.path.clone().unwrap_or_default());
        inject(child, route, views, false);
        route.pop();
    }

    let key = route.join("/");

    if !is_root && needs_index(node) {
        let view = views.nearest(&key);
        node.children
            .insert(0, RouteNode::index(RouteContent::NotFound(view)));
    }

    if !node.children.iter().any(RouteNode::is_catch_all) {
        node.children.push(RouteNode::catch_all(views.nearest(&key)));
    }
}

/// Grouping folders that declare no page of their own
fn needs_index(node: &RouteNode) -> bool {
    let plain = node
        .path
        .as_deref()
        .is_some_and(|path| !path.contains('/') && !path.contains('?'));

    plain && !node.has_index_child()
}

/// Sets the error boundary of the node at `route`
///
/// Fails when the route does not exist in the tree.
pub fn attach_error_boundary(mut root: RouteNode, route: &[&str], view: LazyView) -> Result<RouteNode> {
    find_route_mut(&mut root, route)?.error = Some(view);
    Ok(root)
}

/// Walks from `root` along `route`, one non-index child per segment
///
/// # Examples
///
/// ```
/// use trellis_router::finalize::find_route_mut;
/// use trellis_router::node::RouteNode;
///
/// let mut root = RouteNode::root().with_child(RouteNode::new("users").with_child(RouteNode::new("[id]")));
/// assert!(find_route_mut(&mut root, &["users", "[id]"]).is_ok());
/// assert!(find_route_mut(&mut root, &["users", "new"]).is_err());
/// assert!(find_route_mut(&mut root, &["users", "[id]", "edit"]).is_err());
/// ```
pub fn find_route_mut<'a>(root: &'a mut RouteNode, route: &[&str]) -> Result<&'a mut RouteNode> {
    let mut node = root;

    for segment in route {
        let parent = node.display_path().to_string();

        if node.children.is_empty() {
            return Err(RouteError::MissingChildren {
                parent,
                segment: segment.to_string(),
            });
        }

        node = match node
            .children
            .iter_mut()
            .find(|child| !child.index && child.path.as_deref() == Some(*segment))
        {
            Some(child) => child,
            None => {
                return Err(RouteError::MissingSegment {
                    parent,
                    segment: segment.to_string(),
                })
            }
        };
    }

    Ok(node)
}
