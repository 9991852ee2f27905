//! folio CLI - static portfolio generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_static::Layout;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Generate a single-page portfolio from a directory tree")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the portfolio page (default)
    Build {
        /// Output file (defaults to config or "index.html")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Layout: panels, grid or list
        #[arg(short, long)]
        layout: Option<Layout>,

        /// Skip CSS minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Create the content directories and starter descriptions
    Init {
        /// Overwrite existing description files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = config::load_config(&cli.config)?;

    // Execute command
    match cli.command {
        Some(Commands::Init { yes }) => {
            commands::init::run(&cli.config, &config, yes)?;
        }
        Some(Commands::Build {
            output,
            layout,
            no_minify,
        }) => {
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(config, output, layout, minify)?;
        }
        None => {
            commands::build::run(config, None, None, None)?;
        }
    }

    Ok(())
}
