// File: src/lazy.rs
// Purpose: One-shot, memoized resolution of route modules

//! Lazy route content
//!
//! Tree construction never imports anything. Each renderable node holds a
//! [`LazyRoute`] that imports its module the first time the router asks for
//! it and caches the outcome, so repeated navigations resolve at most once.
//!
//! Failures are returned as [`RouteError::Load`] and are not cached: the
//! router's error boundary decides what to show, and a later navigation may
//! retry. Dropping an in-flight `resolve()` leaves the cell empty.

use std::fmt;
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::{Result, RouteError};
use crate::module::{null_loader, ActionHandler, Component, DataLoader, Middleware, PageImporter, ViewImporter};

/// Label shown for views that come from the crate rather than from a file
pub const BUILTIN_LABEL: &str = "<builtin>";

/// Resolved exports of a page or layout, with its loader already wrapped by middleware
#[derive(Clone)]
pub struct ResolvedRoute {
    pub component: Component,
    pub loader: DataLoader,
    pub action: Option<ActionHandler>,
}

struct LazyRouteInner {
    id: String,
    importer: PageImporter,
    middleware: Middleware,
    cell: OnceCell<Arc<ResolvedRoute>>,
}

/// Memoized page/layout module; clones share one cache
#[derive(Clone)]
pub struct LazyRoute {
    inner: Arc<LazyRouteInner>,
}

impl LazyRoute {
    pub fn new(id: impl Into<String>, importer: PageImporter, middleware: Middleware) -> Self {
        Self {
            inner: Arc::new(LazyRouteInner {
                id: id.into(),
                importer,
                middleware,
                cell: OnceCell::new(),
            }),
        }
    }

    /// Identifier of the file this route was built from
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn is_resolved(&self) -> bool {
        self.inner.cell.initialized()
    }

    /// Imports the module on first call; later calls return the cached result
    ///
    /// A module without a loader gets one resolving to `null`. Either way the
    /// loader passes through the middleware exactly once.
    pub async fn resolve(&self) -> Result<Arc<ResolvedRoute>> {
        let inner = &self.inner;
        let resolved = inner
            .cell
            .get_or_try_init(|| async {
                tracing::debug!("Resolving route module {}", inner.id);

                let module = (inner.importer)().await.map_err(|source| RouteError::Load {
                    id: inner.id.clone(),
                    source,
                })?;

                let loader = (inner.middleware)(module.loader.unwrap_or_else(null_loader));

                Ok::<_, RouteError>(Arc::new(ResolvedRoute {
                    component: module.component,
                    loader,
                    action: module.action,
                }))
            })
            .await?;

        Ok(Arc::clone(resolved))
    }
}

impl fmt::Debug for LazyRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyRoute")
            .field("id", &self.inner.id)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

enum ViewSource {
    File { id: String, importer: ViewImporter },
    Builtin(Component),
}

struct LazyViewInner {
    source: ViewSource,
    cell: OnceCell<Component>,
}

/// Memoized loading/error/not-found view; clones share one cache
#[derive(Clone)]
pub struct LazyView {
    inner: Arc<LazyViewInner>,
}

impl LazyView {
    /// A view imported from a file
    pub fn new(id: impl Into<String>, importer: ViewImporter) -> Self {
        Self::from_source(ViewSource::File {
            id: id.into(),
            importer,
        })
    }

    /// A view shipped with the crate
    pub fn builtin(component: Component) -> Self {
        Self::from_source(ViewSource::Builtin(component))
    }

    fn from_source(source: ViewSource) -> Self {
        Self {
            inner: Arc::new(LazyViewInner {
                source,
                cell: OnceCell::new(),
            }),
        }
    }

    /// File identifier, `None` for builtin views
    pub fn id(&self) -> Option<&str> {
        match &self.inner.source {
            ViewSource::File { id, .. } => Some(id),
            ViewSource::Builtin(_) => None,
        }
    }

    /// File identifier or [`BUILTIN_LABEL`]
    pub fn label(&self) -> &str {
        self.id().unwrap_or(BUILTIN_LABEL)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.inner.source, ViewSource::Builtin(_))
    }

    pub fn is_resolved(&self) -> bool {
        self.inner.cell.initialized()
    }

    /// Imports the view on first call; later calls return the cached component
    pub async fn resolve(&self) -> Result<Component> {
        let inner = &self.inner;
        let component = inner
            .cell
            .get_or_try_init(|| async {
                match &inner.source {
                    ViewSource::Builtin(component) => Ok(Arc::clone(component)),
                    ViewSource::File { id, importer } => {
                        tracing::debug!("Resolving view module {}", id);
                        importer()
                            .await
                            .map(|module| module.component)
                            .map_err(|source| RouteError::Load {
                                id: id.clone(),
                                source,
                            })
                    }
                }
            })
            .await?;

        Ok(Arc::clone(component))
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("id", &self.label())
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
