//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use portgate::output::OutputMode;

/// portgate - Pre-restart health gate for OLT PON ports
#[derive(Parser, Debug)]
#[command(
    name = "portgate",
    version,
    about = "Pre-restart health gate for OLT PON ports",
    long_about = "Decide whether an OLT PON port may be restarted.\n\n\
                  Reads a port stats report and checks PON optical power,\n\
                  the MPCP ACK/REQ ratio and the slice state. Exits 0 only\n\
                  when the restart is safe."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a port stats report and decide whether a restart is allowed
    Check {
        /// Stats report file, or `-` to read from stdin
        stats_file: Option<String>,

        /// Restart policy config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
///
/// Returns whether the requested operation succeeded; for `check` this is
/// the restart verdict.
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for the result.
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check { stats_file, config }) => {
            commands::check(stats_file.as_deref(), config.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("portgate v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(true)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("portgate v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'portgate --help' for usage");
                println!("Run 'portgate check <STATS_FILE>' to check a port");
            }
            Ok(true)
        },
    }
}
