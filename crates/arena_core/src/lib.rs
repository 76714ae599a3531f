//! # arena_core - Turn-Based Combat Simulation Engine
//!
//! This library provides a turn-based combat simulation engine with an
//! adaptive opponent and a JSON API for easy integration with frontends.
//!
//! ## Features
//! - Reproducible matches (same seed + same actions = same match)
//! - Difficulty tiers with randomly rolled opponent skills
//! - Opponent that reads the player's recent moves and counters them
//! - JSON API with a stable response envelope

pub mod ai;
pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod session;

// Re-export main API functions
pub use api::{
    game_stats_json, start_game_json, submit_action_json, ApiError, ApiResponse,
    GameStatsResponse, StartGameRequest, StartGameResponse, SubmitActionRequest,
    SubmitActionResponse,
};
pub use error::BattleError;

// Re-export the session layer
pub use session::{GameSession, MatchOverview, MatchStats, TurnReport, RECENT_LOG_LEN};

// Re-export core engine and model types
pub use engine::{BattleEngine, TurnOutcome, MAX_TURNS};
pub use models::{
    Action, Combatant, Difficulty, MatchStatus, Opponent, Player, SkillSet, TurnEffects,
    TurnRecord,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
