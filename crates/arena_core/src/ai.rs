//! Opponent decision logic.
//!
//! The opponent watches a short window of the player's recent moves and
//! counters the most frequent one; with no readable pattern it falls back to
//! a posture driven by its own health and energy. Skill levels never enter
//! the decision, they only scale damage downstream.

use tracing::debug;

use crate::models::{Action, Opponent};

/// Number of recent player moves inspected for pattern inference.
pub const PATTERN_WINDOW: usize = 3;

/// Below this health the opponent tries to heal first.
const LOW_HEALTH: i32 = 30;
/// Energy needed to afford the low-health heal.
const HEAL_ENERGY: i32 = 20;
/// Energy needed to counter a predicted attack with a defend.
const DEFEND_ENERGY: i32 = 15;
/// Energy needed to punish a predicted defend with a special.
const COUNTER_SPECIAL_ENERGY: i32 = 25;
/// Energy needed for an unprompted special while healthy.
const SPECIAL_ENERGY: i32 = 30;
/// Health fraction above which the opponent presses with specials.
const HEALTHY_FRACTION: f32 = 0.6;
/// Energy fraction above which the opponent attacks rather than turtles.
const ATTACK_ENERGY_FRACTION: f32 = 0.5;

/// Predict the player's next move from the last `PATTERN_WINDOW` entries.
///
/// Returns the most frequent action in the window; ties resolve to the
/// earliest action in enumeration order. `None` until the history is long
/// enough to read.
pub fn predict_player_action(history: &[Action]) -> Option<Action> {
    if history.len() < PATTERN_WINDOW {
        return None;
    }
    let recent = &history[history.len() - PATTERN_WINDOW..];

    let mut predicted = Action::ALL[0];
    let mut best_count = 0;
    for candidate in Action::ALL {
        let count = recent.iter().filter(|a| **a == candidate).count();
        if count > best_count {
            best_count = count;
            predicted = candidate;
        }
    }
    Some(predicted)
}

/// Choose the opponent's action for this turn.
///
/// Rules are evaluated top to bottom and the first match wins. Total over
/// any history length and combatant state; never fails.
pub fn decide(opponent: &Opponent, player_history: &[Action]) -> Action {
    let predicted = predict_player_action(player_history);
    let stats = &opponent.stats;

    let action = if stats.health < LOW_HEALTH && stats.energy >= HEAL_ENERGY {
        Action::Heal
    } else if predicted == Some(Action::Attack) && stats.energy >= DEFEND_ENERGY {
        Action::Defend
    } else if predicted == Some(Action::Defend) && stats.energy >= COUNTER_SPECIAL_ENERGY {
        Action::Special
    } else if stats.energy >= SPECIAL_ENERGY && stats.health_fraction() > HEALTHY_FRACTION {
        Action::Special
    } else if stats.energy_fraction() > ATTACK_ENERGY_FRACTION {
        Action::Attack
    } else {
        Action::Defend
    };

    debug!(
        "{} decided {} (predicted={:?}, hp={}, en={})",
        opponent.name, action, predicted, stats.health, stats.energy
    );
    action
}
