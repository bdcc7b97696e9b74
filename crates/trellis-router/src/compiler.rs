// File: src/compiler.rs
// Purpose: Route compiler - segments, builds and merges every discovered file, then finalizes

use std::collections::HashSet;

use crate::config::CompilerConfig;
use crate::error::Result;
use crate::factory::{create_route, RouteSource};
use crate::fallback::{NotFoundViews, ViewIndex};
use crate::finalize::{add_not_found, attach_error_boundary};
use crate::lazy::{LazyRoute, LazyView};
use crate::merge::merge;
use crate::module::{identity_middleware, Middleware, PageImporter, ViewImporter};
use crate::node::RouteNode;
use crate::segment::parse_identifier;

/// Discovered route files, each identifier paired with its importer
///
/// Order is whatever discovery produced; the compiled structure does not
/// depend on it for well-formed file sets.
#[derive(Clone, Default)]
pub struct RouteFiles {
    /// Page and layout files
    pub pages: Vec<(String, PageImporter)>,
    pub errors: Vec<(String, ViewImporter)>,
    pub not_found: Vec<(String, ViewImporter)>,
    pub loading: Vec<(String, ViewImporter)>,
}

impl RouteFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, id: impl Into<String>, importer: PageImporter) -> Self {
        self.pages.push((id.into(), importer));
        self
    }

    pub fn with_error(mut self, id: impl Into<String>, importer: ViewImporter) -> Self {
        self.errors.push((id.into(), importer));
        self
    }

    pub fn with_not_found(mut self, id: impl Into<String>, importer: ViewImporter) -> Self {
        self.not_found.push((id.into(), importer));
        self
    }

    pub fn with_loading(mut self, id: impl Into<String>, importer: ViewImporter) -> Self {
        self.loading.push((id.into(), importer));
        self
    }

    /// Total number of files across all four maps
    pub fn len(&self) -> usize {
        self.pages.len() + self.errors.len() + self.not_found.len() + self.loading.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compiles [`RouteFiles`] into a single route tree
#[derive(Clone)]
pub struct RouteCompiler {
    config: CompilerConfig,
    middleware: Middleware,
}

impl RouteCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self {
            config,
            middleware: identity_middleware(),
        }
    }

    /// Wraps every resolved data loader
    pub fn with_middleware(mut self, middleware: Middleware) -> Self {
        self.middleware = middleware;
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Builds the route tree
    ///
    /// 1. Loading and not-found files are indexed.
    /// 2. Each page or layout is segmented, built into a branch and merged.
    /// 3. Error views are attached, shallowest first. When several files
    ///    guard the same route, one outside any group folder wins.
    /// 4. Not-found routes are injected once.
    ///
    /// Nothing is imported here; modules resolve on first navigation.
    pub fn compile(&self, files: RouteFiles) -> Result<RouteNode> {
        let prefix = self.config.routing.root_prefix.as_str();
        let total = files.len();
        let RouteFiles {
            pages,
            errors,
            not_found,
            loading,
        } = files;

        let loading = ViewIndex::by_folder(loading, prefix);
        let not_found = NotFoundViews::new(ViewIndex::by_route(not_found, prefix));

        let mut root = RouteNode::root();

        for (id, importer) in pages {
            let parsed = parse_identifier(&id, prefix);

            if !parsed.is_renderable() {
                tracing::debug!("{} declares no page or layout, adding it as a plain folder chain", id);
            }

            let loading_view = loading.find_loading(&parsed);
            tracing::debug!(
                "Merging {} at /{} (loading: {})",
                id,
                parsed.route_key(),
                loading_view.label()
            );

            let route = LazyRoute::new(id.as_str(), importer, self.middleware.clone());
            let branch = create_route(&parsed.segments, &RouteSource::new(id.as_str(), route, loading_view));
            root = merge(root, branch, &self.config.conflicts)?;
        }

        let mut boundaries: Vec<_> = errors
            .into_iter()
            .map(|(id, importer)| (parse_identifier(&id, prefix), importer))
            .collect();
        boundaries.sort_by_cached_key(|(parsed, _)| (parsed.segments.len(), parsed.precedence()));

        let mut attached = HashSet::new();
        for (parsed, importer) in boundaries {
            if !attached.insert(parsed.route_key()) {
                tracing::warn!(
                    "Ignoring {} - route /{} already has an error view",
                    parsed.id,
                    parsed.route_key()
                );
                continue;
            }

            let view = LazyView::new(parsed.id.as_str(), importer);
            root = attach_error_boundary(root, &parsed.route_tokens(), view)?;
        }

        let root = add_not_found(root, &not_found);

        tracing::info!(
            "Compiled {} route files into {} route nodes",
            total,
            root.count_nodes()
        );

        Ok(root)
    }
}

impl Default for RouteCompiler {
    fn default() -> Self {
        Self::new(CompilerConfig::default())
    }
}

/// Compiles the four discovered file maps with the default configuration
///
/// # Examples
///
/// ```
/// use trellis_router::create_routes_from_files;
/// use trellis_router::module::{page_importer, view_importer, PageModule, ViewModule};
///
/// let page = |label: &'static str| page_importer(move || async move { anyhow::Ok(PageModule::placeholder(label)) });
/// let view = |label: &'static str| view_importer(move || async move { anyhow::Ok(ViewModule::placeholder(label)) });
///
/// let root = create_routes_from_files(
///     vec![("app\\page".to_string(), page("home")), ("app\\about\\page".to_string(), page("about"))],
///     vec![],
///     vec![],
///     vec![("app\\loading".to_string(), view("loading"))],
/// )
/// .unwrap();
///
/// assert!(root.has_index_child());
/// assert!(root.child("about").unwrap().has_index_child());
/// assert!(root.child("*").is_some());
/// ```
pub fn create_routes_from_files(
    pages: Vec<(String, PageImporter)>,
    errors: Vec<(String, ViewImporter)>,
    not_found: Vec<(String, ViewImporter)>,
    loading: Vec<(String, ViewImporter)>,
) -> Result<RouteNode> {
    RouteCompiler::default().compile(RouteFiles {
        pages,
        errors,
        not_found,
        loading,
    })
}
