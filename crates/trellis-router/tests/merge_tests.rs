/// Integration tests for the tree merger
///
/// Each property is checked for every merge order of its file set, since
/// discovery order is arbitrary.

mod common;

use common::{branch, index_unique, permutations, source_of};
use pretty_assertions::assert_eq;
use rstest::rstest;
use trellis_router::merge::merge;
use trellis_router::{MergeOptions, Result, RouteError, RouteNode};

fn merge_all(ids: &[&str], options: &MergeOptions) -> Result<RouteNode> {
    ids.iter()
        .try_fold(RouteNode::root(), |root, id| merge(root, branch(id), options))
}

// ============================================================================
// Layout precedence
// ============================================================================

#[rstest]
#[case(&["app\\a\\layout", "app\\a\\page"])]
#[case(&["app\\a\\page", "app\\a\\layout"])]
fn test_layout_wraps_page(#[case] ids: &[&str]) {
    let root = merge_all(ids, &MergeOptions::strict()).unwrap();
    let a = root.child("a").unwrap();

    assert!(a.is_layout());
    assert_eq!(source_of(a), Some("app\\a\\layout"));
    assert_eq!(a.children.len(), 1);

    let index = a.index_child().unwrap();
    assert!(index.is_page());
    assert_eq!(source_of(index), Some("app\\a\\page"));
}

#[test]
fn test_root_layout_wraps_everything() {
    for ids in permutations(&["app\\layout", "app\\page", "app\\about\\page"]) {
        let root = merge_all(&ids, &MergeOptions::strict()).unwrap();
        assert!(root.is_layout());
        assert_eq!(source_of(root.index_child().unwrap()), Some("app\\page"));
        assert!(root.child("about").unwrap().has_index_child());
    }
}

// ============================================================================
// Page-then-children conversion
// ============================================================================

#[rstest]
#[case(&["app\\a\\page", "app\\a\\b\\page"])]
#[case(&["app\\a\\b\\page", "app\\a\\page"])]
fn test_page_with_children(#[case] ids: &[&str]) {
    let root = merge_all(ids, &MergeOptions::strict()).unwrap();
    let a = root.child("a").unwrap();

    assert!(a.render_spec().is_none());
    assert_eq!(a.children.len(), 2);
    assert_eq!(source_of(a.index_child().unwrap()), Some("app\\a\\page"));

    let b = a.child("b").unwrap();
    assert_eq!(b.children.len(), 1);
    assert_eq!(source_of(b.index_child().unwrap()), Some("app\\a\\b\\page"));
}

// ============================================================================
// Dynamic nesting
// ============================================================================

#[rstest]
#[case(&["app\\users\\page", "app\\users\\[id]\\page"])]
#[case(&["app\\users\\[id]\\page", "app\\users\\page"])]
fn test_dynamic_child(#[case] ids: &[&str]) {
    let root = merge_all(ids, &MergeOptions::strict()).unwrap();
    let users = root.child("users").unwrap();

    assert_eq!(source_of(users.index_child().unwrap()), Some("app\\users\\page"));

    let user = users.child("[id]").unwrap();
    assert_eq!(user.dynamic.as_ref().and_then(|kind| kind.param()), Some("id"));
    assert!(user.render_spec().is_none());
    assert_eq!(source_of(user.index_child().unwrap()), Some("app\\users\\[id]\\page"));
}

#[test]
fn test_dynamic_conflict_strict() {
    let result = merge_all(
        &["app\\posts\\[id]\\page", "app\\posts\\[slug]\\page"],
        &MergeOptions::strict(),
    );

    match result {
        Err(RouteError::DynamicConflict {
            parent,
            existing,
            incoming,
        }) => {
            assert_eq!(parent, "posts");
            assert_eq!(existing, "[id]");
            assert_eq!(incoming, "[slug]");
        }
        other => panic!("expected a dynamic conflict, got {:?}", other.map(|root| root.outline())),
    }
}

// ============================================================================
// Index uniqueness & order independence
// ============================================================================

const SITE: [&str; 6] = [
    "app\\layout",
    "app\\page",
    "app\\blog\\page",
    "app\\blog\\[slug]\\page",
    "app\\blog\\[slug]\\layout",
    "app\\(shop)\\cart\\page",
];

#[test]
fn test_index_unique_in_every_order() {
    for ids in permutations(&SITE) {
        let root = merge_all(&ids, &MergeOptions::default()).unwrap();
        assert!(index_unique(&root), "duplicate index child for order {:?}", ids);
    }
}

#[test]
fn test_merge_order_does_not_change_structure() {
    let expected = merge_all(&SITE, &MergeOptions::strict()).unwrap().outline().sorted();

    for ids in permutations(&SITE) {
        let root = merge_all(&ids, &MergeOptions::strict()).unwrap();
        assert_eq!(root.outline().sorted(), expected, "order {:?}", ids);
    }
}

#[test]
fn test_duplicate_index_first_wins() {
    let ids = ["app\\a\\page.tsx", "app\\a\\page.jsx", "app\\a\\page.mdx"];
    let root = merge_all(&ids, &MergeOptions::default()).unwrap();
    let a = root.child("a").unwrap();

    assert_eq!(a.children.len(), 1);
    assert_eq!(source_of(a.index_child().unwrap()), Some("app\\a\\page.tsx"));
}

#[test]
fn test_merge_rejects_different_roots() {
    let result = merge(branch("app\\a\\page"), RouteNode::new("a"), &MergeOptions::default());
    assert!(matches!(result, Err(RouteError::PathMismatch { .. })));
}
