//! Input checks shared by the registry operations.
//!
//! Every check here runs before the registry state is touched.

use tracing::error;

use crate::error::{Result, ScoreboardError};
use crate::models::same_team;

pub const HOME_TEAM_BLANK_MESSAGE: &str = "Home team name must not be null or empty.";
pub const AWAY_TEAM_BLANK_MESSAGE: &str = "Away team name must not be null or empty.";
pub const SAME_TEAMS_MESSAGE: &str = "Home and away teams must be different.";
pub const NEGATIVE_SCORE_MESSAGE: &str = "Scores must not be negative.";

pub fn validate_team_names(home_team: &str, away_team: &str) -> Result<()> {
    if home_team.trim().is_empty() {
        error!("Home team name: {:?} is invalid.", home_team);
        return Err(ScoreboardError::validation(HOME_TEAM_BLANK_MESSAGE));
    }
    if away_team.trim().is_empty() {
        error!("Away team name: {:?} is invalid.", away_team);
        return Err(ScoreboardError::validation(AWAY_TEAM_BLANK_MESSAGE));
    }
    if same_team(home_team, away_team) {
        error!("Home team {} and away team {} cannot be the same.", home_team, away_team);
        return Err(ScoreboardError::validation(SAME_TEAMS_MESSAGE));
    }
    Ok(())
}

/// Checks a score pair and narrows it to the stored type.
pub fn validate_scores(home_score: i64, away_score: i64) -> Result<(u32, u32)> {
    if home_score < 0 || away_score < 0 {
        error!("Invalid scores: {} - {}", home_score, away_score);
        return Err(ScoreboardError::validation(NEGATIVE_SCORE_MESSAGE));
    }
    match (u32::try_from(home_score), u32::try_from(away_score)) {
        (Ok(home), Ok(away)) => Ok((home, away)),
        _ => {
            error!("Scores out of range: {} - {}", home_score, away_score);
            Err(ScoreboardError::validation(format!(
                "Scores must not exceed {}.",
                u32::MAX
            )))
        }
    }
}
