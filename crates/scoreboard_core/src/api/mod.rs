pub mod json_api;

pub use json_api::{
    apply_command_json, summary_json, ScoreboardCommand, SummaryResponse, SUMMARY_SCHEMA_VERSION,
};
