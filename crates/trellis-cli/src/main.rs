mod commands;
mod logging;
mod manifest;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trellis")]
#[command(version, about = "Trellis CLI - compile file-based routes into a route tree", long_about = None)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a route manifest and print the route tree
    Inspect {
        /// Route manifest (trellis.toml)
        manifest: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "tree")]
        format: OutputFormat,

        /// Compiler config file, replacing the manifest's [compiler] table
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Treat duplicate claims and competing dynamic segments as errors
        #[arg(long)]
        strict: bool,
    },

    /// Compile a route manifest and report a summary
    Check {
        /// Route manifest (trellis.toml)
        manifest: PathBuf,

        /// Compiler config file, replacing the manifest's [compiler] table
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Treat duplicate claims and competing dynamic segments as errors
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Indented, colored outline
    Tree,
    /// Pretty-printed JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    match cli.command {
        Commands::Inspect {
            manifest,
            format,
            config,
            strict,
        } => {
            commands::inspect::execute(&manifest, config.as_deref(), strict, format)?;
        }
        Commands::Check {
            manifest,
            config,
            strict,
        } => {
            commands::check::execute(&manifest, config.as_deref(), strict)?;
        }
    }

    Ok(())
}
