//! Error taxonomy for the combat engine.
//!
//! Every variant is a local, recoverable condition surfaced to the caller as
//! a structured result; nothing here aborts the process.

use thiserror::Error;

use crate::models::Action;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    /// No match has been started, or the current one already ended.
    #[error("no active match in progress")]
    NoActiveMatch,

    /// The submitted action costs more energy than the player has. Checked
    /// before resolution, so the turn counter does not move.
    #[error("not enough energy for {action}: requires {required}, {available} available")]
    InsufficientEnergy { action: Action, required: i32, available: i32 },

    /// The submitted action is not one of the four recognized kinds.
    #[error("invalid action: {input:?}")]
    InvalidAction { input: String },
}

impl BattleError {
    /// Stable code string used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            BattleError::NoActiveMatch => "NO_ACTIVE_MATCH",
            BattleError::InsufficientEnergy { .. } => "INSUFFICIENT_ENERGY",
            BattleError::InvalidAction { .. } => "INVALID_ACTION",
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            BattleError::NoActiveMatch => true,           // Start a new match
            BattleError::InsufficientEnergy { .. } => true, // Pick a cheaper action
            BattleError::InvalidAction { .. } => true,    // Re-prompt
        }
    }
}
