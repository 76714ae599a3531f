pub mod action;
pub mod combatant;
pub mod opponent;
pub mod record;

pub use action::Action;
pub use combatant::{Combatant, Player, ENERGY_REGEN, MAX_ENERGY, MAX_HEALTH};
pub use opponent::{Difficulty, Opponent, SkillSet};
pub use record::{MatchStatus, TurnEffects, TurnRecord};
