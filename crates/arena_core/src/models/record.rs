//! Per-turn log records and match status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::action::Action;

/// Damage and healing produced by one resolved action pair.
///
/// `player_damage` is damage landed on the player and `ai_damage` damage
/// landed on the opponent, matching how frontends phrase the turn report
/// ("you dealt `ai_damage`, you took `player_damage`").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEffects {
    /// Damage landed on the player, after skill scaling and jitter.
    pub player_damage: i32,
    /// Damage landed on the opponent, after jitter.
    pub ai_damage: i32,
    /// Health the player restored this turn.
    pub player_heal: i32,
    /// Health the opponent restored this turn.
    pub ai_heal: i32,
    /// Reserved for future rule effects; currently always empty.
    pub special_effects: Vec<String>,
}

/// One entry in the match log. Append-only, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub player_action: Action,
    pub ai_action: Action,
    pub result: TurnEffects,
    pub timestamp: DateTime<Utc>,
}

/// Match lifecycle status. Anything but `Ongoing` is terminal: the match no
/// longer accepts actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Ongoing,
    PlayerWins,
    AiWins,
    Draw,
}

impl MatchStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchStatus::Ongoing)
    }
}
