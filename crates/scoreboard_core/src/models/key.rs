//! Case-insensitive identity of a game slot.

use serde::Serialize;
use std::fmt;

/// Normalised identifier derived from a (home, away) pair.
///
/// Both names are lower-cased and kept as separate fields, so no character
/// in a team name can make two different pairs collide. The original
/// spelling stays on the [`Match`](super::Match) for display. The pair is
/// ordered: `("Spain", "Brazil")` and `("Brazil", "Spain")` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MatchKey {
    home: String,
    away: String,
}

impl MatchKey {
    pub fn new(home_team: &str, away_team: &str) -> Self {
        Self {
            home: normalize_team(home_team),
            away: normalize_team(away_team),
        }
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn away(&self) -> &str {
        &self.away
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.home, self.away)
    }
}

/// Lower-cased form of a team name used for every identity comparison.
pub fn normalize_team(team: &str) -> String {
    team.to_lowercase()
}

/// Case-insensitive team name comparison.
pub fn same_team(a: &str, b: &str) -> bool {
    normalize_team(a) == normalize_team(b)
}
