//! # scoreboard_core - Live Football Scoreboard
//!
//! An in-process registry of games in progress, ranked by score.
//!
//! ## Features
//! - Case-insensitive, case-preserving team identity
//! - A team plays in at most one game at a time
//! - Deterministic ranking: total score, then most recently started
//! - Thread-safe: one lock covers each validate-then-mutate step
//! - JSON command/summary API for external drivers
//!
//! ```
//! use scoreboard_core::MatchRegistry;
//!
//! let board = MatchRegistry::new();
//! board.start("Mexico", "Canada")?;
//! board.start("Spain", "Brazil")?;
//! board.update_score("Spain", "Brazil", 10, 2)?;
//! board.update_score("Mexico", "Canada", 0, 5)?;
//! assert_eq!(board.summary(), "Spain 10 - Brazil 2\nMexico 0 - Canada 5");
//! # Ok::<(), scoreboard_core::ScoreboardError>(())
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod registry;
pub mod validation;

pub use api::{apply_command_json, summary_json, ScoreboardCommand, SummaryResponse};
pub use error::{ConflictKind, ErrorKind, NotFoundKind, Result, ScoreboardError};
pub use models::{Match, MatchKey, MatchView};
pub use registry::MatchRegistry;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
