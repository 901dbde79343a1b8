//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod serve;
pub(crate) mod tree;

use std::path::PathBuf;

use clap::Args;
use lectern_config::{CliSettings, Config};
use lectern_server::server_config_from_lectern_config;
use lectern_site::Site;

pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use tree::TreeArgs;

use crate::error::CliError;

/// Content location arguments shared by all commands.
#[derive(Args)]
pub(crate) struct ContentArgs {
    /// Path to configuration file (default: auto-discover lectern.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Primary content directory (overrides config).
    #[arg(short = 's', long, env = "LECTERN_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Fallback content directory, checked in order (overrides config).
    #[arg(long = "fallback-dir")]
    fallback_dirs: Vec<PathBuf>,
}

impl ContentArgs {
    /// Load configuration with these arguments and server overrides applied.
    pub(crate) fn load_config(
        self,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            host,
            port,
            content_dir: self.content_dir,
            fallback_dirs: self.fallback_dirs,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Build the site described by a loaded configuration.
pub(crate) fn site_from_config(config: &Config, version: &str) -> Site {
    server_config_from_lectern_config(config, version.to_owned()).site()
}
