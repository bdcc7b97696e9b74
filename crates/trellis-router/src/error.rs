// File: src/error.rs
// Purpose: Errors raised while building route trees or resolving route modules

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = RouteError> = std::result::Result<T, E>;

/// Everything that can go wrong while compiling or resolving a route tree.
///
/// Structural variants (`PathMismatch`, `MissingChildren`, `MissingSegment`)
/// mean the discovered file set contradicts itself and always abort
/// compilation. `DuplicateClaim` and `DynamicConflict` are only raised when
/// the matching [`ConflictPolicy`](crate::ConflictPolicy) is `Error`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("paths do not match: {target:?} and {incoming:?}")]
    PathMismatch {
        target: Option<String>,
        incoming: Option<String>,
    },

    #[error("route with path {parent:?} has no children, but expected to find {segment:?}")]
    MissingChildren { parent: String, segment: String },

    #[error("segment {segment:?} does not exist among the children of route with path {parent:?}")]
    MissingSegment { parent: String, segment: String },

    #[error("{slot} slot of route {path:?} is already claimed by {existing}, rejecting {incoming}")]
    DuplicateClaim {
        path: String,
        slot: &'static str,
        existing: String,
        incoming: String,
    },

    #[error("dynamic segment {incoming:?} conflicts with {existing:?} under route {parent:?}")]
    DynamicConflict {
        parent: String,
        existing: String,
        incoming: String,
    },

    #[error("failed to load route module {id:?}")]
    Load {
        id: String,
        #[source]
        source: anyhow::Error,
    },
}

impl RouteError {
    /// True for errors caused by contradictory route files rather than policy
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            RouteError::PathMismatch { .. }
                | RouteError::MissingChildren { .. }
                | RouteError::MissingSegment { .. }
        )
    }
}
