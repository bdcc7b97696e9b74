// Shared fixtures for the integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use trellis_router::factory::{create_route, RouteSource};
use trellis_router::module::{
    builtin_loading, identity_middleware, page_importer, view_importer, PageImporter, PageModule, ViewImporter,
    ViewModule,
};
use trellis_router::segment::parse_identifier;
use trellis_router::{LazyRoute, LazyView, RouteFiles, RouteNode};

pub fn page(label: &str) -> PageImporter {
    let label = label.to_string();
    page_importer(move || {
        let label = label.clone();
        async move { anyhow::Ok(PageModule::placeholder(label)) }
    })
}

pub fn view(label: &str) -> ViewImporter {
    let label = label.to_string();
    view_importer(move || {
        let label = label.clone();
        async move { anyhow::Ok(ViewModule::placeholder(label)) }
    })
}

/// Page importer that counts how often it runs
pub fn counting_page(calls: Arc<AtomicUsize>) -> PageImporter {
    page_importer(move || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { anyhow::Ok(PageModule::placeholder("counted")) }
    })
}

/// Page importer whose first attempt fails
pub fn flaky_page(calls: Arc<AtomicUsize>) -> PageImporter {
    page_importer(move || {
        let attempt = calls.fetch_add(1, Ordering::SeqCst);
        async move {
            if attempt == 0 {
                anyhow::bail!("chunk failed to load");
            }
            anyhow::Ok(PageModule::placeholder("recovered"))
        }
    })
}

/// Page/layout identifiers plus loading identifiers, with stub importers
pub fn route_files(pages: &[&str], loading: &[&str]) -> RouteFiles {
    let files = pages
        .iter()
        .fold(RouteFiles::new(), |files, id| files.with_page(*id, page(id)));

    loading
        .iter()
        .fold(files, |files, id| files.with_loading(*id, view(id)))
}

/// Raw single-branch subtree for one identifier
pub fn branch(id: &str) -> RouteNode {
    let source = RouteSource::new(
        id,
        LazyRoute::new(id, page(id), identity_middleware()),
        LazyView::builtin(builtin_loading()),
    );
    create_route(&parse_identifier(id, "app").segments, &source)
}

pub fn source_of(node: &RouteNode) -> Option<&str> {
    node.render_spec().map(|spec| spec.source.as_str())
}

pub fn loading_of(node: &RouteNode) -> Option<&str> {
    node.render_spec().map(|spec| spec.loading.label())
}

/// True when no node in the tree has more than one index child
pub fn index_unique(node: &RouteNode) -> bool {
    node.children.iter().filter(|child| child.index).count() <= 1 && node.children.iter().all(index_unique)
}

/// Every ordering of `items`
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    (0..items.len())
        .flat_map(|i| {
            let mut rest = items.to_vec();
            let first = rest.remove(i);
            permutations(&rest).into_iter().map(move |mut tail| {
                tail.insert(0, first.clone());
                tail
            })
        })
        .collect()
}
