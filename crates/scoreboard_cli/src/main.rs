//! Scoreboard CLI
//!
//! Runs the demo scenario or a JSON command script and prints the summary.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use scoreboard_cli::{CliConfig, OutputFormat};
#[cfg(feature = "cli")]
use scoreboard_core::MatchRegistry;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(about = "Live football scoreboard driver", long_about = None)]
struct Cli {
    /// Summary output format (overrides the config file)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Log filter when RUST_LOG is unset (overrides the config file)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demo scenario
    Demo,

    /// Apply a JSON array of commands, then print the summary
    Run {
        /// Script file path
        #[arg(long)]
        script: PathBuf,

        /// Log failing commands and continue instead of aborting
        #[arg(long, default_value = "false")]
        keep_going: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::from_env()?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }
    config.validate()?;
    scoreboard_cli::init_logging(&config.log_level)?;

    let registry = MatchRegistry::new();

    match cli.command {
        Commands::Demo => {
            let (before, after) = scoreboard_cli::run_demo(&registry, config.format)?;
            println!("Current Scoreboard:");
            println!("{before}");
            println!("\nAfter finishing Norway vs Denmark:");
            println!("{after}");
        }

        Commands::Run { script, keep_going } => {
            let commands = scoreboard_cli::load_script(&script)?;
            let stats = scoreboard_cli::run_commands(&registry, &commands, keep_going)?;
            if stats.failed > 0 {
                eprintln!("{} of {} commands failed", stats.failed, commands.len());
            }
            println!("{}", scoreboard_cli::render_summary(&registry, config.format)?);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("scoreboard CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
