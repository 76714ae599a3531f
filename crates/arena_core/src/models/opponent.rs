//! Opponent combatant: difficulty tiers, rolled skills, action memory.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::action::Action;
use super::combatant::Combatant;

/// Opponent difficulty tier. Determines the range all four skills are rolled
/// from when the opponent is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Skills rolled in 30-50.
    Easy,
    /// Skills rolled in 50-75.
    #[default]
    Medium,
    /// Skills rolled in 75-95.
    Hard,
}

impl Difficulty {
    /// Inclusive skill-roll range for this tier.
    pub fn skill_range(&self) -> RangeInclusive<u8> {
        match self {
            Difficulty::Easy => 30..=50,
            Difficulty::Medium => 50..=75,
            Difficulty::Hard => 75..=95,
        }
    }

    /// Lenient request parsing: missing or unrecognized tiers fall back to
    /// the default instead of failing the request.
    pub fn from_request(input: Option<&str>) -> Self {
        match input {
            Some(s) => match s.trim().to_ascii_lowercase().as_str() {
                "easy" => Difficulty::Easy,
                "medium" => Difficulty::Medium,
                "hard" => Difficulty::Hard,
                _ => Difficulty::default(),
            },
            None => Difficulty::default(),
        }
    }

    /// Uppercase tag used in the opponent display name.
    fn tag(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

/// The opponent's four skills, rolled once at creation and immutable after.
/// Only `attack` feeds the damage pipeline today; the rest are reported
/// through the stats query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub attack: u8,
    pub defense: u8,
    pub strategy: u8,
    pub adaptation: u8,
}

impl SkillSet {
    /// Roll all four skills uniformly from the tier's range.
    pub fn roll(difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        let range = difficulty.skill_range();
        Self {
            attack: rng.gen_range(range.clone()),
            defense: rng.gen_range(range.clone()),
            strategy: rng.gen_range(range.clone()),
            adaptation: rng.gen_range(range),
        }
    }
}

/// The heuristic-driven side of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub stats: Combatant,
    /// Display name shown by frontends, e.g. "AI-MEDIUM".
    pub name: String,
    pub difficulty: Difficulty,
    pub skills: SkillSet,
    /// The opponent's own past actions, oldest first. Distinct from the
    /// player history it analyzes.
    pub memory: Vec<Action>,
}

impl Opponent {
    pub fn new(difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        Self {
            stats: Combatant::new(),
            name: format!("AI-{}", difficulty.tag()),
            difficulty,
            skills: SkillSet::roll(difficulty, rng),
            memory: Vec::new(),
        }
    }
}
