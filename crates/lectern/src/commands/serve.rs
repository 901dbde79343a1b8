//! `lectern serve` command implementation.

use clap::Args;
use lectern_server::{run_server, server_config_from_lectern_config};

use crate::commands::ContentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    content: ContentArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and resolution logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.content.load_config(self.host, self.port)?;

        output.highlight(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Content directory: {}",
            config.content_resolved.root.display()
        ));
        for fallback in &config.content_resolved.fallback_dirs {
            output.info(&format!("Fallback directory: {}", fallback.display()));
        }

        let server_config = server_config_from_lectern_config(&config, version.to_owned());
        run_server(server_config).await?;

        Ok(())
    }
}
