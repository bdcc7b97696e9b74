//! # Trellis Router
//!
//! Compiles a flat set of discovered route files into one nested route tree
//! for a client-side router:
//! - Pages (`app/about/page.tsx`) and layouts (`app/layout.tsx`)
//! - Dynamic segments (`[id]`, `[id?]`, `[...slug]`, `[[...slug]]`)
//! - Route groups (`(marketing)`) that nest files without adding a segment
//! - Loading fallbacks, error boundaries and not-found views
//!
//! ## Pipeline
//!
//! Every page or layout identifier goes through:
//! - [`segment::parse_identifier`] - folders, role and route segments
//! - [`factory::create_route`] - a single-branch subtree
//! - [`merge::merge`] - folded into the accumulating tree
//!
//! After the last file, error views are attached and
//! [`finalize::add_not_found`] injects catch-all and index routes once.
//!
//! Module imports are deferred: each renderable node holds a
//! [`LazyRoute`] that resolves its component, loader and action on first
//! navigation and caches the result.
//!
//! ## Example
//!
//! ```
//! use trellis_router::{RouteCompiler, RouteFiles};
//! use trellis_router::module::{page_importer, PageModule};
//!
//! let page = || page_importer(|| async { anyhow::Ok(PageModule::placeholder("page")) });
//!
//! let files = RouteFiles::new()
//!     .with_page("app\\users\\page", page())
//!     .with_page("app\\users\\[id]\\page", page());
//!
//! let root = RouteCompiler::default().compile(files).unwrap();
//! let users = root.child("users").unwrap();
//! assert!(users.has_index_child());
//! assert!(users.child("[id]").unwrap().has_index_child());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod compiler;
mod config;
mod error;
pub mod factory;
pub mod fallback;
pub mod finalize;
pub mod lazy;
pub mod merge;
pub mod module;
pub mod node;
pub mod path;
pub mod segment;

pub use compiler::{create_routes_from_files, RouteCompiler, RouteFiles};
pub use config::{CompilerConfig, ConflictPolicy, MergeOptions, RoutingConfig};
pub use error::{Result, RouteError};
pub use fallback::{NotFoundViews, ViewIndex};
pub use lazy::{LazyRoute, LazyView, ResolvedRoute};
pub use node::{OutlineContent, RenderSpec, RouteContent, RouteNode, RouteOutline, CATCH_ALL_PATH};
pub use segment::{FileRole, ParsedIdentifier, RouteRole, RouteSegment, SegmentKind};
