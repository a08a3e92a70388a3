pub mod game;
pub mod key;

pub use game::{Match, MatchView};
pub use key::{normalize_team, same_team, MatchKey};
