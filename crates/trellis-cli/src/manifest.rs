use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use trellis_router::module::{page_importer, view_importer, PageModule, ViewModule};
use trellis_router::{CompilerConfig, RouteFiles};

/// Route manifest (trellis.toml)
///
/// Lists discovered route files by identifier. Modules are never loaded;
/// every importer yields a placeholder that renders its own identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Page and layout identifiers
    #[serde(default)]
    pub pages: Vec<String>,

    #[serde(default)]
    pub errors: Vec<String>,

    #[serde(default)]
    pub not_found: Vec<String>,

    #[serde(default)]
    pub loading: Vec<String>,

    #[serde(default)]
    pub compiler: CompilerConfig,
}

impl Manifest {
    /// Parse a manifest from TOML text
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a manifest from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {:?}", path))?;

        Self::from_str(&content).with_context(|| format!("Failed to parse manifest: {:?}", path))
    }

    /// Number of listed files
    pub fn len(&self) -> usize {
        self.pages.len() + self.errors.len() + self.not_found.len() + self.loading.len()
    }

    /// Placeholder importers for every listed identifier, in listed order
    pub fn route_files(&self) -> RouteFiles {
        let files = self
            .pages
            .iter()
            .fold(RouteFiles::new(), |files, id| files.with_page(id.as_str(), placeholder_page(id)));

        let files = self
            .errors
            .iter()
            .fold(files, |files, id| files.with_error(id.as_str(), placeholder_view(id)));

        let files = self
            .not_found
            .iter()
            .fold(files, |files, id| files.with_not_found(id.as_str(), placeholder_view(id)));

        self.loading
            .iter()
            .fold(files, |files, id| files.with_loading(id.as_str(), placeholder_view(id)))
    }
}

fn placeholder_page(id: &str) -> trellis_router::module::PageImporter {
    let id = id.to_string();
    page_importer(move || {
        let id = id.clone();
        async move { anyhow::Ok(PageModule::placeholder(id)) }
    })
}

fn placeholder_view(id: &str) -> trellis_router::module::ViewImporter {
    let id = id.to_string();
    view_importer(move || {
        let id = id.clone();
        async move { anyhow::Ok(ViewModule::placeholder(id)) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use trellis_router::ConflictPolicy;

    const SAMPLE: &str = r#"
pages = ["app/layout.tsx", "app/page.tsx", "app/users/[id]/page.tsx"]
errors = ["app/error.tsx"]
not_found = ["app/not-found.tsx"]
loading = ["app/loading.tsx"]

[compiler.conflicts]
duplicates = "error"
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::from_str(SAMPLE).unwrap();

        assert_eq!(manifest.pages.len(), 3);
        assert_eq!(manifest.errors, vec!["app/error.tsx"]);
        assert_eq!(manifest.len(), 6);
        assert_eq!(manifest.compiler.routing.root_prefix, "app");
        assert_eq!(manifest.compiler.conflicts.duplicates, ConflictPolicy::Error);
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::from_str("").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert!(manifest.route_files().is_empty());
    }

    #[test]
    fn test_route_files_keep_every_entry() {
        let files = Manifest::from_str(SAMPLE).unwrap().route_files();

        assert_eq!(files.pages.len(), 3);
        assert_eq!(files.pages[2].0, "app/users/[id]/page.tsx");
        assert_eq!(files.errors.len(), 1);
        assert_eq!(files.not_found.len(), 1);
        assert_eq!(files.loading.len(), 1);
    }

    #[test]
    fn test_unknown_field_type_is_rejected() {
        assert!(Manifest::from_str("pages = \"app/page.tsx\"").is_err());
    }
}
