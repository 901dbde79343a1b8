//! `lectern render` command implementation.

use clap::Args;

use crate::commands::{ContentArgs, site_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// URL path to resolve (e.g. `getting-started` or `genesis/1/1`).
    slug: String,

    #[command(flatten)]
    content: ContentArgs,

    /// Print the resolved content as JSON.
    #[arg(long)]
    json: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the slug does not resolve, or
    /// output cannot be written.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();
        let json = self.json;

        let config = self.content.load_config(None, None)?;
        let site = site_from_config(&config, version);
        let content = site.render(&self.slug)?;

        if json {
            output.data(&serde_json::to_string_pretty(&content)?)?;
            return Ok(());
        }

        output.highlight(&content.title);
        output.dim(&content.source_path.display().to_string());
        output.data(content.html.trim_end())?;
        Ok(())
    }
}
