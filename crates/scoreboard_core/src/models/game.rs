//! Active game data structures
//!
//! A [`Match`] only lives inside the registry. Everything handed out to
//! callers is an owned [`MatchView`] snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::key::MatchKey;

/// One game in progress.
#[derive(Debug, Clone)]
pub struct Match {
    key: MatchKey,
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    start_order: u64,
    started_at: DateTime<Utc>,
}

impl Match {
    pub(crate) fn new(home_team: &str, away_team: &str, start_order: u64) -> Self {
        Self {
            key: MatchKey::new(home_team, away_team),
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: 0,
            away_score: 0,
            start_order,
            started_at: Utc::now(),
        }
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn start_order(&self) -> u64 {
        self.start_order
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Sum of both scores. Widened so `u32::MAX + u32::MAX` cannot overflow.
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    pub fn key(&self) -> &MatchKey {
        &self.key
    }

    /// Replaces both scores at once.
    pub(crate) fn set_score(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    /// Returns the opponent of `team` in this game, if `team` plays in it.
    /// `team` must already be normalised.
    pub(crate) fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.key.home() == team {
            Some(&self.away_team)
        } else if self.key.away() == team {
            Some(&self.home_team)
        } else {
            None
        }
    }

    pub fn view(&self) -> MatchView {
        MatchView {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            home_score: self.home_score,
            away_score: self.away_score,
            total_score: self.total_score(),
            start_order: self.start_order,
            started_at: self.started_at,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}

/// Read-only snapshot of a game, safe to hand out of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub total_score: u64,
    pub start_order: u64,
    pub started_at: DateTime<Utc>,
}

impl fmt::Display for MatchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
