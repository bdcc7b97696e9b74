use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use trellis_router::RouteNode;

pub fn execute(manifest: &Path, config: Option<&Path>, strict: bool) -> Result<()> {
    let root = super::compile_manifest(manifest, config, strict)?;
    let summary = Summary::of(&root);

    println!("{}", "✓ Routes compiled".green().bold());
    println!();
    println!("Nodes:            {}", summary.nodes.to_string().cyan());
    println!("Pages:            {}", summary.pages);
    println!("Layouts:          {}", summary.layouts);
    println!("Dynamic segments: {}", summary.dynamic);
    println!("Error boundaries: {}", summary.error_boundaries);
    println!("Catch-alls:       {}", summary.catch_alls);

    if summary.pages == 0 {
        println!();
        println!("{}", "⚠ No pages found - every route renders the not-found view".yellow());
    }

    Ok(())
}

/// Node counts of a compiled tree
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub nodes: usize,
    pub pages: usize,
    pub layouts: usize,
    pub dynamic: usize,
    pub error_boundaries: usize,
    pub catch_alls: usize,
}

impl Summary {
    pub fn of(root: &RouteNode) -> Self {
        let mut summary = Self::default();
        summary.add(root);
        summary
    }

    fn add(&mut self, node: &RouteNode) {
        self.nodes += 1;
        self.pages += usize::from(node.is_page());
        self.layouts += usize::from(node.is_layout());
        self.dynamic += usize::from(node.dynamic.is_some());
        self.error_boundaries += usize::from(node.error.is_some());
        self.catch_alls += usize::from(node.is_catch_all());

        for child in &node.children {
            self.add(child);
        }
    }
}
