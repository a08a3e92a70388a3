//! Live game registry
//!
//! [`MatchRegistry`] owns every active game. All changes go through
//! [`start`](MatchRegistry::start), [`update_score`](MatchRegistry::update_score)
//! and [`finish`](MatchRegistry::finish), each of which validates and mutates
//! under a single write lock. Readers take the read lock and get owned
//! snapshots, so they never see a half-applied change.
//!
//! There is no global instance: construct a registry and share it with `Arc`
//! when more than one caller needs it.

pub mod ranking;


use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::error::{ConflictKind, Result, ScoreboardError};
use crate::models::{Match, MatchKey, MatchView};
use crate::validation::{validate_scores, validate_team_names};

#[derive(Debug, Default)]
struct RegistryState {
    games: HashMap<MatchKey, Match>,
    next_start_order: u64,
}

impl RegistryState {
    /// First active game that `team` (normalised) takes part in, with its opponent.
    fn find_participation(&self, team: &str) -> Option<&str> {
        self.games.values().find_map(|game| game.opponent_of(team))
    }

    fn ranked_games(&self) -> Vec<&Match> {
        ranking::rank(self.games.values())
    }
}

/// Thread-safe registry of games in progress.
#[derive(Debug, Default)]
pub struct MatchRegistry {
    state: RwLock<RegistryState>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic cannot leave the state half-written: every mutation is a
    // single insert, remove or score assignment.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================
    // Mutations
    // ========================

    /// Starts a new game with the given home and away teams at 0 - 0.
    ///
    /// # Errors
    ///
    /// * `Validation` if a name is blank or both names are the same team.
    /// * `Conflict` if either team already plays in an active game, or the
    ///   same pairing is already in progress.
    pub fn start(&self, home_team: &str, away_team: &str) -> Result<()> {
        validate_team_names(home_team, away_team)?;

        let key = MatchKey::new(home_team, away_team);
        let mut state = self.write();

        for (team, normalized) in [(home_team, key.home()), (away_team, key.away())] {
            if let Some(opponent) = state.find_participation(normalized) {
                warn!("Team {} is already playing against {}.", team, opponent);
                return Err(ScoreboardError::Conflict(ConflictKind::TeamAlreadyPlaying {
                    team: team.to_string(),
                    opponent: opponent.to_string(),
                }));
            }
        }

        // Normally caught above; a key must never be inserted twice.
        if state.games.contains_key(&key) {
            warn!("Game already in progress between {} and {}.", home_team, away_team);
            return Err(ScoreboardError::Conflict(ConflictKind::DuplicateGame {
                home: home_team.to_string(),
                away: away_team.to_string(),
            }));
        }

        let start_order = state.next_start_order;
        state.next_start_order += 1;
        state.games.insert(key, Match::new(home_team, away_team, start_order));

        info!(start_order, "Started game: {} vs {}", home_team, away_team);
        Ok(())
    }

    /// Replaces the score of an ongoing game.
    ///
    /// Scores are checked before the game is looked up, so a negative score
    /// is reported as `Validation` even for an unknown pairing.
    pub fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<()> {
        let (home_score, away_score) = validate_scores(home_score, away_score)?;

        let key = MatchKey::new(home_team, away_team);
        let mut state = self.write();
        let Some(game) = state.games.get_mut(&key) else {
            warn!("No game found between {} and {}.", home_team, away_team);
            return Err(ScoreboardError::game_not_found(home_team, away_team));
        };

        game.set_score(home_score, away_score);
        info!(
            "Updated score: {} {} - {} {}",
            game.home_team(),
            home_score,
            game.away_team(),
            away_score
        );
        Ok(())
    }

    /// Finishes an ongoing game and removes it from the board.
    pub fn finish(&self, home_team: &str, away_team: &str) -> Result<()> {
        let key = MatchKey::new(home_team, away_team);
        let removed = self.write().games.remove(&key);

        match removed {
            Some(game) => {
                info!("Finished game: {} vs {}", game.home_team(), game.away_team());
                Ok(())
            }
            None => {
                warn!("No game found between {} and {}.", home_team, away_team);
                Err(ScoreboardError::finish_not_found(home_team, away_team))
            }
        }
    }

    // ========================
    // Queries
    // ========================

    /// Ongoing games as display lines, highest total first and most recently
    /// started first among equal totals.
    pub fn summary_lines(&self) -> Vec<String> {
        let state = self.read();
        state.ranked_games().into_iter().map(ToString::to_string).collect()
    }

    /// [`summary_lines`](Self::summary_lines) joined with newlines. Empty when
    /// no game is in progress.
    pub fn summary(&self) -> String {
        let summary = self.summary_lines().join("\n");
        if summary.is_empty() {
            debug!("No games in progress.");
        } else {
            debug!("Summary of ongoing games:\n{}", summary);
        }
        summary
    }

    /// Snapshots of all ongoing games in scoreboard order.
    pub fn ranked(&self) -> Vec<MatchView> {
        let state = self.read();
        state.ranked_games().into_iter().map(Match::view).collect()
    }

    /// Snapshot of the game for this pairing. Names match case-insensitively;
    /// home and away are not interchangeable.
    pub fn get(&self, home_team: &str, away_team: &str) -> Option<MatchView> {
        let key = MatchKey::new(home_team, away_team);
        self.read().games.get(&key).map(Match::view)
    }

    /// Whether a game for this pairing is in progress.
    pub fn contains(&self, home_team: &str, away_team: &str) -> bool {
        self.read().games.contains_key(&MatchKey::new(home_team, away_team))
    }

    /// Number of games in progress.
    pub fn len(&self) -> usize {
        self.read().games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().games.is_empty()
    }
}
