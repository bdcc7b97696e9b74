// File: src/fallback.rs
// Purpose: Lookup of loading and not-found views by folder or route path

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::lazy::LazyView;
use crate::module::{builtin_loading, builtin_not_found, ViewImporter};
use crate::path::hierarchy::last_component;
use crate::path::FolderHierarchy;
use crate::segment::{is_group, parse_identifier, ParsedIdentifier};

/// Views indexed by a `/`-joined key
///
/// Keys are either raw folder keys (`(shop)/cart`, groups kept) or route
/// keys (`users/[id]`, groups elided), depending on the constructor.
/// When two files share a key the one with the lower
/// [`ParsedIdentifier::precedence`] is kept, whatever the registration order.
#[derive(Debug, Clone, Default)]
pub struct ViewIndex {
    views: HashMap<String, LazyView>,
}

impl ViewIndex {
    /// Indexes files by the folder that holds them
    pub fn by_folder<I>(files: I, root_prefix: &str) -> Self
    where
        I: IntoIterator<Item = (String, ViewImporter)>,
    {
        Self::build(files, root_prefix, ParsedIdentifier::folder_key)
    }

    /// Indexes files by the route path they apply to
    pub fn by_route<I>(files: I, root_prefix: &str) -> Self
    where
        I: IntoIterator<Item = (String, ViewImporter)>,
    {
        Self::build(files, root_prefix, ParsedIdentifier::route_key)
    }

    fn build<I>(files: I, root_prefix: &str, key_of: fn(&ParsedIdentifier) -> String) -> Self
    where
        I: IntoIterator<Item = (String, ViewImporter)>,
    {
        let mut ranked: HashMap<String, ((usize, String), LazyView)> = HashMap::new();

        for (id, importer) in files {
            let parsed = parse_identifier(&id, root_prefix);
            let key = key_of(&parsed);
            let rank = parsed.precedence();
            let view = LazyView::new(id, importer);

            match ranked.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert((rank, view));
                }
                Entry::Occupied(mut slot) => {
                    let (kept, ignored) = if rank < slot.get().0 {
                        let (_, previous) = slot.insert((rank, view));
                        (slot.get().1.label().to_string(), previous)
                    } else {
                        (slot.get().1.label().to_string(), view)
                    };

                    tracing::warn!(
                        "Ignoring {} - {} takes precedence for {:?}",
                        ignored.label(),
                        kept,
                        slot.key()
                    );
                }
            }
        }

        let views = ranked
            .into_iter()
            .map(|(key, (_, view))| (key, view))
            .collect();

        Self { views }
    }

    pub fn get(&self, key: &str) -> Option<&LazyView> {
        self.views.get(key)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Nearest view at `key` or any ancestor key
    pub fn nearest(&self, key: &str) -> Option<&LazyView> {
        FolderHierarchy::new(key).find_map(|k| self.get(k))
    }

    /// Resolves the loading fallback for a page or layout file
    ///
    /// Search order, first match wins:
    /// 1. a loading file in the same folder
    /// 2. a loading file in the nearest enclosing group folder, walking upward
    /// 3. the root-folder loading file (process-wide default)
    /// 4. the builtin fallback
    ///
    /// Plain (non-group) ancestor folders are not searched.
    pub fn find_loading(&self, parsed: &ParsedIdentifier) -> LazyView {
        let key = parsed.folder_key();

        FolderHierarchy::new(&key)
            .enumerate()
            .filter(|(depth, k)| *depth == 0 || is_group(last_component(k)))
            .find_map(|(_, k)| self.get(k))
            .or_else(|| self.get(""))
            .cloned()
            .unwrap_or_else(|| LazyView::builtin(builtin_loading()))
    }
}

/// Not-found views available to the finalizer
#[derive(Debug, Clone)]
pub struct NotFoundViews {
    index: ViewIndex,
    fallback: LazyView,
}

impl NotFoundViews {
    /// `index` must be keyed by route path ([`ViewIndex::by_route`])
    pub fn new(index: ViewIndex) -> Self {
        let fallback = index
            .get("")
            .cloned()
            .unwrap_or_else(|| LazyView::builtin(builtin_not_found()));

        Self { index, fallback }
    }

    /// Only the builtin not-found view
    pub fn builtin() -> Self {
        Self::new(ViewIndex::default())
    }

    /// Nearest not-found view for a route key, else the root one, else the builtin
    pub fn nearest(&self, route_key: &str) -> LazyView {
        self.index
            .nearest(route_key)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for NotFoundViews {
    fn default() -> Self {
        Self::builtin()
    }
}
