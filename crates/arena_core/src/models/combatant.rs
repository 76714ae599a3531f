//! Combatant state: clamped health/energy plus the player-side extras.

use serde::{Deserialize, Serialize};

use super::action::Action;

/// Health cap for both sides.
pub const MAX_HEALTH: i32 = 100;
/// Energy cap for both sides.
pub const MAX_ENERGY: i32 = 100;
/// Flat energy regained by both sides at the end of every turn.
pub const ENERGY_REGEN: i32 = 5;

/// Health and energy of one side. Both values stay in `[0, 100]`; every
/// mutator clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub health: i32,
    pub energy: i32,
}

impl Combatant {
    /// Fresh combatant at full health and energy.
    pub fn new() -> Self {
        Self { health: MAX_HEALTH, energy: MAX_ENERGY }
    }

    /// Subtract damage, clamping at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Add healing, clamping at the cap.
    pub fn restore_health(&mut self, amount: i32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }

    /// Pay an action's energy cost, clamping at zero.
    pub fn spend_energy(&mut self, cost: i32) {
        self.energy = (self.energy - cost).max(0);
    }

    /// End-of-turn regeneration, clamping at the cap.
    pub fn regain_energy(&mut self, amount: i32) {
        self.energy = (self.energy + amount).min(MAX_ENERGY);
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Health as a `0.0..=1.0` fraction, as read by the decision policy.
    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / MAX_HEALTH as f32
    }

    /// Energy as a `0.0..=1.0` fraction, as read by the decision policy.
    pub fn energy_fraction(&self) -> f32 {
        self.energy as f32 / MAX_ENERGY as f32
    }
}

impl Default for Combatant {
    fn default() -> Self {
        Self::new()
    }
}

/// The human-controlled side: a combatant plus score and move history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub stats: Combatant,
    /// Awarded on victory; never decreases within a match.
    pub score: u32,
    /// Every action submitted this match, oldest first. Read by the
    /// opponent's pattern inference.
    pub moves: Vec<Action>,
}

impl Player {
    pub fn new() -> Self {
        Self { stats: Combatant::new(), score: 0, moves: Vec::new() }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
