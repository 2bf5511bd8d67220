//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod check;
mod init;
mod list;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "biascheck")]
#[command(about = "Look up detection and mitigation strategies for ML bias types")]
#[command(version)]
pub struct Cli {
    /// Data directory holding the dataset and templates (overrides config file)
    #[arg(long, short = 'd', global = true)]
    data_dir: Option<PathBuf>,

    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Resolve relative paths from current working directory instead of config file location
    #[arg(long, global = true)]
    cwd: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default dataset and page if they are missing
    Init,

    /// Start the web server
    Serve {
        /// Address to bind: a port, a host, or host:port
        #[arg(short, long, env = "BIASCHECK_BIND")]
        bind: Option<String>,
    },

    /// Print every bias type in the reference table
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search bias types containing the given text (case-insensitive)
    Check {
        /// Text to look for in bias type names
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        use_cwd: cli.cwd,
        data_dir: cli.data_dir,
    };
    let (settings, _config) = load_settings_with_options(options).await;

    match cli.command {
        Commands::Init => init::cmd_init(&settings),
        Commands::Serve { bind } => serve::cmd_serve(&settings, bind.as_deref()).await,
        Commands::List { json } => list::cmd_list(&settings, json),
        Commands::Check { query, json } => check::cmd_check(&settings, &query, json),
    }
}
