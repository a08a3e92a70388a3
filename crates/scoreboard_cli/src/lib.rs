//! Scoreboard Driver Library
//!
//! Replays scripted commands (or the built-in demo) against a
//! [`MatchRegistry`] and renders the resulting summary.

pub mod config;

use anyhow::{Context, Result};
use scoreboard_core::{summary_json, MatchRegistry, ScoreboardCommand};
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use config::{CliConfig, OutputFormat, CONFIG_PATH_ENV};

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("Invalid log filter: {default_filter}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub applied: usize,
    pub failed: usize,
}

pub fn load_script(path: &Path) -> Result<Vec<ScoreboardCommand>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse script JSON: {}", path.display()))
}

/// Applies `commands` in order. Without `keep_going` the first failure aborts.
pub fn run_commands(
    registry: &MatchRegistry,
    commands: &[ScoreboardCommand],
    keep_going: bool,
) -> Result<RunStats> {
    let mut stats = RunStats::default();

    for (index, command) in commands.iter().enumerate() {
        match command.apply(registry) {
            Ok(()) => stats.applied += 1,
            Err(err) if keep_going => {
                warn!(index, kind = ?err.kind(), "Skipping failed command: {err}");
                stats.failed += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Command #{index} failed: {command:?}"));
            }
        }
    }

    info!(applied = stats.applied, failed = stats.failed, "Script finished");
    Ok(stats)
}

pub fn render_summary(registry: &MatchRegistry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(registry.summary()),
        OutputFormat::Json => Ok(summary_json(registry)?),
    }
}

/// The canonical demo: six games, a few updates and one finished game.
///
/// Returns the "before" and "after" summaries.
pub fn run_demo(registry: &MatchRegistry, format: OutputFormat) -> Result<(String, String)> {
    for (home, away) in [
        ("Mexico", "Canada"),
        ("Spain", "Brazil"),
        ("Germany", "France"),
        ("Uruguay", "Italy"),
    ] {
        registry.start(home, away)?;
    }
    registry.update_score("Spain", "Brazil", 10, 2)?;
    registry.update_score("Mexico", "Canada", 0, 5)?;
    let before = render_summary(registry, format)?;

    registry.start("Norway", "Denmark")?;
    registry.start("Argentina", "Australia")?;
    registry.update_score("Argentina", "Australia", 3, 1)?;
    registry.update_score("Germany", "France", 2, 2)?;
    registry.update_score("Uruguay", "Italy", 6, 6)?;
    registry.finish("Norway", "Denmark")?;
    let after = render_summary(registry, format)?;

    Ok((before, after))
}
