mod commands;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ctxroute")]
#[command(version, about = "ctxroute - check route patterns and resolve route declarations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test whether a path matches a pattern
    Match {
        /// Path to test (e.g. /users/123)
        path: String,

        /// Route pattern (e.g. /users/:id)
        pattern: String,
    },

    /// Extract named parameters of a pattern from a path
    Params {
        /// Path to extract from
        path: String,

        /// Route pattern with :name segments
        pattern: String,
    },

    /// Compose nested patterns into a full pattern (ancestors first, own pattern last)
    Compose {
        /// Pattern chain, outermost first
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Resolve a path against a route declaration file
    Resolve {
        /// Path to resolve (defaults to the configured base_path)
        path: Option<String>,

        /// Route declaration file
        #[arg(short, long, default_value = ctx_router::config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// List every declared route with its full pattern
    Routes {
        /// Route declaration file
        #[arg(short, long, default_value = ctx_router::config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    // Diagnostics are printed by the commands; RUST_LOG enables the library's logs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Match { path, pattern } => {
            commands::check::execute_match(&path, &pattern)?;
        }
        Commands::Params { path, pattern } => {
            commands::check::execute_params(&path, &pattern)?;
        }
        Commands::Compose { patterns } => {
            commands::compose::execute(&patterns)?;
        }
        Commands::Resolve { path, config } => {
            commands::resolve::execute(&config, path.as_deref())?;
        }
        Commands::Routes { config } => {
            commands::routes::execute(&config)?;
        }
    }

    Ok(())
}
