//! JSON surface over [`MatchRegistry`]
//!
//! Commands arrive as JSON objects tagged by `op`; the summary leaves as a
//! versioned document with the games in scoreboard order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::MatchView;
use crate::registry::MatchRegistry;

/// Version of the [`SummaryResponse`] layout.
pub const SUMMARY_SCHEMA_VERSION: u8 = 1;

/// One registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScoreboardCommand {
    Start {
        home_team: String,
        away_team: String,
    },
    UpdateScore {
        home_team: String,
        away_team: String,
        home_score: i64,
        away_score: i64,
    },
    Finish {
        home_team: String,
        away_team: String,
    },
}

impl ScoreboardCommand {
    pub fn apply(&self, registry: &MatchRegistry) -> Result<()> {
        match self {
            ScoreboardCommand::Start { home_team, away_team } => registry.start(home_team, away_team),
            ScoreboardCommand::UpdateScore { home_team, away_team, home_score, away_score } => {
                registry.update_score(home_team, away_team, *home_score, *away_score)
            }
            ScoreboardCommand::Finish { home_team, away_team } => registry.finish(home_team, away_team),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub games: Vec<MatchView>,
}

impl SummaryResponse {
    pub fn from_registry(registry: &MatchRegistry) -> Self {
        Self {
            schema_version: SUMMARY_SCHEMA_VERSION,
            generated_at: Utc::now(),
            games: registry.ranked(),
        }
    }
}

/// Parses one command and applies it to `registry`.
pub fn apply_command_json(registry: &MatchRegistry, command_json: &str) -> Result<()> {
    let command: ScoreboardCommand = serde_json::from_str(command_json)?;
    debug!(?command, "Applying scoreboard command");
    command.apply(registry)
}

/// Ranked summary as a pretty-printed JSON document.
pub fn summary_json(registry: &MatchRegistry) -> Result<String> {
    let response = SummaryResponse::from_registry(registry);
    Ok(serde_json::to_string_pretty(&response)?)
}
