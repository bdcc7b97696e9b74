// File: src/merge.rs
// Purpose: Tree merger - folds single-branch subtrees into the accumulating route tree

//! Tree merging
//!
//! [`merge`] takes both trees by value and returns the merged one, so the
//! compiler threads a single owned root through every file it discovers.
//!
//! Node-level rules, in precedence order:
//!
//! 1. A layout arriving at a node with nothing renderable is adopted.
//! 2. A layout arriving at a node holding a page pushes the page down into
//!    an index child and takes the node.
//! 3. A page arriving at a node becomes its index child.
//! 4. When the index slot is already taken the first page keeps it
//!    (`first-wins`) or the merge fails (`error`).
//! 5. A bare page that gains children is first turned into an index child
//!    of itself.
//!
//! Children are then merged by path; unknown paths are appended. Appended
//! children go through the same rules, so a page never sits directly on a
//! node of the merged tree.

use crate::config::{ConflictPolicy, MergeOptions};
use crate::error::{Result, RouteError};
use crate::node::{RouteContent, RouteNode};

/// Merges `source` into `target` and returns the merged tree
///
/// Both roots must match the same path; anything else is a
/// [`RouteError::PathMismatch`]. Ambiguous claims follow `options`.
///
/// # Examples
///
/// ```
/// use trellis_router::merge::merge;
/// use trellis_router::node::RouteNode;
/// use trellis_router::MergeOptions;
///
/// let target = RouteNode::root().with_child(RouteNode::new("about"));
/// let source = RouteNode::root().with_child(RouteNode::new("blog"));
///
/// let merged = merge(target, source, &MergeOptions::default()).unwrap();
/// assert!(merged.child("about").is_some());
/// assert!(merged.child("blog").is_some());
///
/// assert!(merge(RouteNode::new("a"), RouteNode::new("b"), &MergeOptions::default()).is_err());
/// ```
pub fn merge(mut target: RouteNode, source: RouteNode, options: &MergeOptions) -> Result<RouteNode> {
    merge_into(&mut target, source, options)?;
    Ok(target)
}

fn merge_into(target: &mut RouteNode, source: RouteNode, options: &MergeOptions) -> Result<()> {
    if target.path != source.path || target.index != source.index {
        return Err(RouteError::PathMismatch {
            target: target.path.clone(),
            incoming: source.path,
        });
    }

    let RouteNode {
        dynamic,
        content,
        error,
        children,
        ..
    } = source;

    if target.dynamic.is_none() {
        target.dynamic = dynamic;
    }
    if target.error.is_none() {
        target.error = error;
    }

    // Rules 2 and 5: a page never stays on a node that takes more content
    if target.is_page() && (content.is_some() || !children.is_empty()) {
        demote_page(target, options)?;
    }

    if let Some(content) = content {
        merge_content(target, content, options)?;
    }

    merge_children(target, children, options)
}

/// Moves the node's own page into its index slot
fn demote_page(target: &mut RouteNode, options: &MergeOptions) -> Result<()> {
    match target.content.take() {
        Some(page) => claim_index(target, page, options),
        None => Ok(()),
    }
}

fn merge_content(target: &mut RouteNode, content: RouteContent, options: &MergeOptions) -> Result<()> {
    match content {
        RouteContent::Layout(spec) => match &target.content {
            Some(RouteContent::Layout(existing)) => resolve_conflict(
                options.duplicates,
                RouteError::DuplicateClaim {
                    path: target.display_path().to_string(),
                    slot: "layout",
                    existing: existing.source.clone(),
                    incoming: spec.source,
                },
            ),
            _ => {
                target.content = Some(RouteContent::Layout(spec));
                Ok(())
            }
        },
        RouteContent::Page(_) => claim_index(target, content, options),
        RouteContent::NotFound(_) => {
            if target.content.is_none() {
                target.content = Some(content);
            }
            Ok(())
        }
    }
}

/// Places `content` in the index child of `target`, creating it at the front if needed
fn claim_index(target: &mut RouteNode, content: RouteContent, options: &MergeOptions) -> Result<()> {
    let parent = target.display_path().to_string();

    match target.children.iter_mut().find(|child| child.index) {
        Some(index) => claim_slot(&parent, index, content, options),
        None => {
            target.children.insert(0, RouteNode::index(content));
            Ok(())
        }
    }
}

/// Puts `content` on an index node; renderables replace not-found views, never each other
fn claim_slot(parent: &str, slot: &mut RouteNode, content: RouteContent, options: &MergeOptions) -> Result<()> {
    let occupied = slot.render_spec().map(|spec| spec.source.clone());

    match occupied {
        None if content.render_spec().is_some() || slot.content.is_none() => {
            slot.content = Some(content);
            Ok(())
        }
        None => Ok(()),
        Some(_) if content.render_spec().is_none() => Ok(()),
        Some(existing) => resolve_conflict(
            options.duplicates,
            RouteError::DuplicateClaim {
                path: parent.to_string(),
                slot: "index",
                existing,
                incoming: content.describe(),
            },
        ),
    }
}

fn merge_children(target: &mut RouteNode, children: Vec<RouteNode>, options: &MergeOptions) -> Result<()> {
    for child in children {
        if child.index {
            if let Some(content) = child.content {
                claim_index(target, content, options)?;
            }
            continue;
        }

        let existing = target
            .children
            .iter()
            .position(|candidate| !candidate.index && candidate.path == child.path);

        match existing {
            Some(position) => merge_into(&mut target.children[position], child, options)?,
            None => {
                check_dynamic_siblings(target, &child, options)?;

                let mut fresh = RouteNode {
                    path: child.path.clone(),
                    ..Default::default()
                };
                merge_into(&mut fresh, child, options)?;
                target.children.push(fresh);
            }
        }
    }

    Ok(())
}

/// Flags a new dynamic child competing with an existing one for the same slot
///
/// `[id]` next to `[slug]` both match any single segment. Under `first-wins`
/// both are kept and the router tries the first registered one first.
fn check_dynamic_siblings(target: &RouteNode, incoming: &RouteNode, options: &MergeOptions) -> Result<()> {
    let Some(kind) = &incoming.dynamic else {
        return Ok(());
    };

    let rival = target.children.iter().find(|child| {
        !child.index && child.dynamic.as_ref().map(|other| other.slot()) == Some(kind.slot())
    });

    match rival {
        Some(rival) => resolve_conflict(
            options.dynamic_segments,
            RouteError::DynamicConflict {
                parent: target.display_path().to_string(),
                existing: rival.display_path().to_string(),
                incoming: incoming.display_path().to_string(),
            },
        ),
        None => Ok(()),
    }
}

fn resolve_conflict(policy: ConflictPolicy, conflict: RouteError) -> Result<()> {
    match policy {
        ConflictPolicy::FirstWins => {
            tracing::warn!("{} (first registered wins)", conflict);
            Ok(())
        }
        ConflictPolicy::Error => Err(conflict),
    }
}
