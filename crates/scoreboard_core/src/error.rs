use thiserror::Error;

/// Broad category of a [`ScoreboardError`], for callers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Json,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    #[error("Team {team} is already playing against {opponent}.")]
    TeamAlreadyPlaying { team: String, opponent: String },

    #[error("Game already in progress between {home} and {away}.")]
    DuplicateGame { home: String, away: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundKind {
    #[error("Game not found between {home} and {away}.")]
    Game { home: String, away: String },

    #[error("Cannot finish a non-existing game between {home} and {away}.")]
    Finish { home: String, away: String },
}

impl NotFoundKind {
    pub fn teams(&self) -> (&str, &str) {
        match self {
            NotFoundKind::Game { home, away } | NotFoundKind::Finish { home, away } => (home, away),
        }
    }
}

#[derive(Error, Debug)]
pub enum ScoreboardError {
    #[error("{message}")]
    Validation { message: String },

    #[error(transparent)]
    Conflict(ConflictKind),

    #[error(transparent)]
    NotFound(NotFoundKind),

    #[error("Invalid scoreboard command: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreboardError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ScoreboardError::Validation { message: message.into() }
    }

    pub(crate) fn game_not_found(home: &str, away: &str) -> Self {
        ScoreboardError::NotFound(NotFoundKind::Game {
            home: home.to_string(),
            away: away.to_string(),
        })
    }

    pub(crate) fn finish_not_found(home: &str, away: &str) -> Self {
        ScoreboardError::NotFound(NotFoundKind::Finish {
            home: home.to_string(),
            away: away.to_string(),
        })
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoreboardError::Validation { .. } => ErrorKind::Validation,
            ScoreboardError::Conflict(_) => ErrorKind::Conflict,
            ScoreboardError::NotFound(_) => ErrorKind::NotFound,
            ScoreboardError::Json(_) => ErrorKind::Json,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_messages_name_both_teams() {
        let err = ScoreboardError::Conflict(ConflictKind::TeamAlreadyPlaying {
            team: "Norway".to_string(),
            opponent: "Denmark".to_string(),
        });
        assert_eq!(err.to_string(), "Team Norway is already playing against Denmark.");
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = ScoreboardError::Conflict(ConflictKind::DuplicateGame {
            home: "Norway".to_string(),
            away: "denmark".to_string(),
        });
        assert_eq!(err.to_string(), "Game already in progress between Norway and denmark.");
    }

    #[test]
    fn test_not_found_messages_name_both_teams() {
        let err = ScoreboardError::game_not_found("Norway", "Sweden");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Game not found between Norway and Sweden.");

        let err = ScoreboardError::finish_not_found("Norway", "Sweden");
        assert_eq!(err.to_string(), "Cannot finish a non-existing game between Norway and Sweden.");
        match err {
            ScoreboardError::NotFound(kind) => assert_eq!(kind.teams(), ("Norway", "Sweden")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
