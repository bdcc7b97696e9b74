pub mod check;
pub mod inspect;

use std::path::Path;

use anyhow::{bail, Context, Result};
use trellis_router::{CompilerConfig, RouteCompiler, RouteNode};

use crate::manifest::Manifest;

/// Loads a manifest and compiles it with the effective configuration
///
/// An explicit config path must exist; only the manifest's own table falls back to defaults.
pub fn compile_manifest(path: &Path, config: Option<&Path>, strict: bool) -> Result<RouteNode> {
    if let Some(config) = config {
        if !config.exists() {
            bail!("Config file not found: {:?}", config);
        }
    }

    let manifest = Manifest::from_file(path)?;

    let config = match config {
        Some(config) => CompilerConfig::load(config)?,
        None => manifest.compiler.clone(),
    };
    let config = if strict { config.strict() } else { config };

    tracing::info!(
        "Compiling {} route files from {:?} (root prefix {:?})",
        manifest.len(),
        path,
        config.routing.root_prefix
    );

    RouteCompiler::new(config)
        .compile(manifest.route_files())
        .with_context(|| format!("Failed to compile routes from {:?}", path))
}
