//! Lectern CLI - Markdown content site.
//!
//! Provides commands for:
//! - `serve`: Start the content server
//! - `tree`: Print the navigation tree
//! - `render`: Resolve a slug and print the rendered page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ServeArgs, TreeArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lectern - Markdown content site.
#[derive(Parser)]
#[command(name = "lectern", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the content server.
    Serve(ServeArgs),
    /// Print the navigation tree.
    Tree(TreeArgs),
    /// Resolve a slug and print the rendered page.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute(VERSION))
        }
        Commands::Tree(args) => args.execute(VERSION),
        Commands::Render(args) => args.execute(VERSION),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_with_fallbacks() {
        let cli = Cli::try_parse_from([
            "lectern",
            "serve",
            "-s",
            "content",
            "--fallback-dir",
            "build/content",
            "--fallback-dir",
            "archive",
            "-p",
            "8080",
            "-v",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Serve(args) if args.verbose));
    }

    #[test]
    fn test_parse_render_requires_slug() {
        assert!(Cli::try_parse_from(["lectern", "render"]).is_err());
        assert!(Cli::try_parse_from(["lectern", "render", "genesis/1/1", "--json"]).is_ok());
    }
}
