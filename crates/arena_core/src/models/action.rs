//! Combat actions and their fixed energy costs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BattleError;

/// One combat action, chosen once per turn by each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Attack,
    Defend,
    Special,
    Heal,
}

impl Action {
    /// Every action in enumeration order. Pattern-inference ties resolve
    /// toward the earliest entry, and the effectiveness table is indexed in
    /// this order.
    pub const ALL: [Action; 4] = [Action::Attack, Action::Defend, Action::Special, Action::Heal];

    /// Fixed energy cost deducted when the action resolves.
    pub fn energy_cost(&self) -> i32 {
        match self {
            Action::Attack => 10,
            Action::Defend => 5,
            Action::Special => 25,
            Action::Heal => 20,
        }
    }

    /// Human-readable label for frontends.
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::Attack => "Attack",
            Action::Defend => "Defend",
            Action::Special => "Special Attack",
            Action::Heal => "Heal",
        }
    }

    /// Position in `ALL`, used as the effectiveness table index.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Attack => "attack",
            Action::Defend => "defend",
            Action::Special => "special",
            Action::Heal => "heal",
        };
        f.write_str(name)
    }
}

impl FromStr for Action {
    type Err = BattleError;

    /// Case-insensitive parse of the wire token. Anything unrecognized is an
    /// `InvalidAction`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attack" => Ok(Action::Attack),
            "defend" => Ok(Action::Defend),
            "special" => Ok(Action::Special),
            "heal" => Ok(Action::Heal),
            _ => Err(BattleError::InvalidAction { input: s.to_string() }),
        }
    }
}
