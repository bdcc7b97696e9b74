use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use trellis_router::{OutlineContent, RouteOutline};

use crate::OutputFormat;

pub fn execute(manifest: &Path, config: Option<&Path>, strict: bool, format: OutputFormat) -> Result<()> {
    let root = super::compile_manifest(manifest, config, strict)?;
    let outline = root.outline();

    match format {
        OutputFormat::Tree => print!("{}", render_tree(&outline)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outline)?),
    }

    Ok(())
}

/// Renders an outline as an indented tree, one node per line
pub fn render_tree(root: &RouteOutline) -> String {
    let mut out = describe(root);
    out.push('\n');
    render_children(&root.children, "", &mut out);
    out
}

fn render_children(children: &[RouteOutline], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let (branch, indent) = if i + 1 == children.len() {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        out.push_str(prefix);
        out.push_str(branch);
        out.push_str(&describe(child));
        out.push('\n');

        render_children(&child.children, &format!("{}{}", prefix, indent), out);
    }
}

fn describe(node: &RouteOutline) -> String {
    let mut line = match (&node.path, node.index) {
        (_, true) => "(index)".dimmed().to_string(),
        (Some(path), false) => path.bold().to_string(),
        (None, false) => String::new(),
    };

    if let Some(param) = &node.param {
        line.push_str(&format!(" {}", format!(":{}", param).magenta()));
    }

    match node.content {
        Some(OutlineContent::Page) => line.push_str(&format!(" {}", "[page]".green())),
        Some(OutlineContent::Layout) => line.push_str(&format!(" {}", "[layout]".cyan())),
        Some(OutlineContent::NotFound) => line.push_str(&format!(" {}", "[not-found]".yellow())),
        None => {}
    }

    if let Some(source) = &node.source {
        line.push_str(&format!(" {}", source));
    }
    if let Some(loading) = &node.loading {
        line.push_str(&format!(" {}", format!("loading={}", loading).dimmed()));
    }
    if let Some(error) = &node.error {
        line.push_str(&format!(" {}", format!("error={}", error).red()));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(path: Option<&str>, content: Option<OutlineContent>, source: Option<&str>) -> RouteOutline {
        RouteOutline {
            path: path.map(str::to_string),
            index: path.is_none(),
            param: None,
            content,
            source: source.map(str::to_string),
            loading: None,
            error: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_render_tree() {
        colored::control::set_override(false);

        let mut home = node(None, Some(OutlineContent::Page), Some("app/page.tsx"));
        home.loading = Some("app/loading.tsx".to_string());

        let mut user = node(Some("[id]"), None, None);
        user.param = Some("id".to_string());
        user.children = vec![node(None, Some(OutlineContent::Page), Some("app/users/[id]/page.tsx"))];

        let mut users = node(Some("users"), None, None);
        users.children = vec![user];

        let mut root = node(Some("/"), Some(OutlineContent::Layout), Some("app/layout.tsx"));
        root.error = Some("app/error.tsx".to_string());
        root.children = vec![
            home,
            users,
            node(Some("*"), Some(OutlineContent::NotFound), Some("<builtin>")),
        ];

        let expected = "\
/ [layout] app/layout.tsx error=app/error.tsx
├── (index) [page] app/page.tsx loading=app/loading.tsx
├── users
│   └── [id] :id
│       └── (index) [page] app/users/[id]/page.tsx
└── * [not-found] <builtin>
";

        assert_eq!(render_tree(&root), expected);
    }
}
