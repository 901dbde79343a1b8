//! `lectern tree` command implementation.

use clap::Args;
use lectern_site::ContentNode;
use serde::Serialize;

use crate::commands::{ContentArgs, site_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    content: ContentArgs,

    /// Print the tree as JSON (same shape as /api/navigation).
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TreeJson<'a> {
    items: &'a [ContentNode],
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or output cannot be written.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();
        let json = self.json;

        let config = self.content.load_config(None, None)?;
        let site = site_from_config(&config, version);
        tracing::debug!(root = %site.navigation_root().display(), "Building navigation tree");
        let items = site.navigation();

        if json {
            output.data(&serde_json::to_string_pretty(&TreeJson { items: &items })?)?;
            return Ok(());
        }

        output.dim(&site.navigation_root().display().to_string());
        if items.is_empty() {
            output.info("No content found");
        } else {
            output.data(format_tree(&items).trim_end())?;
        }
        Ok(())
    }
}

/// Indented outline: directories end in `/`, files show their URL path.
fn format_tree(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    write_level(nodes, 0, &mut out);
    out
}

fn write_level(nodes: &[ContentNode], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        if node.is_directory {
            out.push_str(&format!("{indent}{}/\n", node.name));
            write_level(node.children(), depth + 1, out);
        } else {
            out.push_str(&format!("{indent}{}  {}\n", node.name, node.path));
        }
    }
}
