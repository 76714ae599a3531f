//! Battle Engine
//!
//! Core turn orchestration for the arena. This module owns the whole match:
//! both combatants, the turn log, the match RNG, and the termination state
//! machine.
//!
//! ## Data Flow Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     TURN RESOLUTION FLOW                     │
//! ├──────────────────────────────────────────────────────────────┤
//! │  [INPUT]                                                     │
//! │    submit_action(player_action)                              │
//! │         │                                                    │
//! │         ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │               BattleEngine (this module)               │  │
//! │  │                                                        │  │
//! │  │  1. turn += 1                                          │  │
//! │  │  2. ai::decide()          ← player history so far      │  │
//! │  │  3. resolve_actions()     ← effectiveness table + RNG  │  │
//! │  │  4. apply damage / heals / energy  (clamped 0-100)     │  │
//! │  │  5. append histories and turn record                   │  │
//! │  │  6. evaluate termination (KO checks, then turn cap)    │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │         │                                                    │
//! │         ▼                                                    │
//! │  [OUTPUT: TurnOutcome]                                       │
//! │    turn, both actions, damage/heal amounts, status           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every random draw (skill rolls, damage jitter, heal amounts) comes from
//! the engine-owned ChaCha8 RNG, so a fixed seed and action sequence replay
//! to an identical match.

pub mod effectiveness;
pub mod resolution;

pub use effectiveness::base_damage;
pub use resolution::resolve_actions;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::ai;
use crate::error::BattleError;
use crate::models::{
    Action, Difficulty, MatchStatus, Opponent, Player, TurnEffects, TurnRecord, ENERGY_REGEN,
};

/// Turn count at which an undecided match is called a draw.
pub const MAX_TURNS: u32 = 50;

/// Flat score awarded for winning a match.
const WIN_SCORE_BASE: u32 = 100;
/// Additional score per point of health remaining at the win.
const WIN_SCORE_HEALTH_BONUS: u32 = 2;

/// Summary of one resolved turn. Carries the same timestamp as the log
/// record it was written alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub turn: u32,
    pub player_action: Action,
    pub ai_action: Action,
    pub result: TurnEffects,
    pub status: MatchStatus,
    pub timestamp: DateTime<Utc>,
}

/// One complete match from start to terminal status.
///
/// The engine exclusively owns both combatants and the opponent's memory for
/// the lifetime of the match; callers interact through `submit_action` and
/// the read accessors.
pub struct BattleEngine {
    pub(crate) match_id: String,
    pub(crate) player: Player,
    pub(crate) opponent: Opponent,
    pub(crate) turn: u32,
    pub(crate) log: Vec<TurnRecord>,
    pub(crate) status: MatchStatus,
    rng: ChaCha8Rng,
    /// Seed the RNG was built from, kept for reproducing a match.
    seed: u64,
}

impl BattleEngine {
    /// Start a fresh match with an entropy-derived seed.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_seed(difficulty, rand::random())
    }

    /// Start a fresh match with a fixed seed. Same seed plus same action
    /// sequence replays to an identical match.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let match_id = short_match_id();
        let opponent = Opponent::new(difficulty, &mut rng);
        info!("Match {} started against {} (seed {})", match_id, opponent.name, seed);
        Self {
            match_id,
            player: Player::new(),
            opponent,
            turn: 0,
            log: Vec::new(),
            status: MatchStatus::Ongoing,
            rng,
            seed,
        }
    }

    /// Resolve one full turn driven by the player's submitted action.
    ///
    /// Fails with `NoActiveMatch` once the match is terminal. Energy
    /// affordability is the caller's concern; the engine resolves whatever
    /// action it is handed, clamping energy at zero.
    pub fn submit_action(&mut self, action: Action) -> Result<TurnOutcome, BattleError> {
        if self.status.is_terminal() {
            return Err(BattleError::NoActiveMatch);
        }

        self.turn += 1;

        // The decision reads the history as of before this turn.
        let ai_action = ai::decide(&self.opponent, &self.player.moves);

        let effects =
            resolve_actions(action, ai_action, self.opponent.skills.attack, &mut self.rng);

        self.player.stats.take_damage(effects.player_damage);
        self.opponent.stats.take_damage(effects.ai_damage);
        if effects.player_heal > 0 {
            self.player.stats.restore_health(effects.player_heal);
        }
        if effects.ai_heal > 0 {
            self.opponent.stats.restore_health(effects.ai_heal);
        }

        self.player.stats.spend_energy(action.energy_cost());
        self.opponent.stats.spend_energy(ai_action.energy_cost());
        self.player.stats.regain_energy(ENERGY_REGEN);
        self.opponent.stats.regain_energy(ENERGY_REGEN);

        self.player.moves.push(action);
        self.opponent.memory.push(ai_action);

        let timestamp = Utc::now();
        self.log.push(TurnRecord {
            turn: self.turn,
            player_action: action,
            ai_action,
            result: effects.clone(),
            timestamp,
        });

        self.update_status();
        debug!(
            "Turn {}: {} vs {} -> player {}hp, {} {}hp, {:?}",
            self.turn,
            action,
            ai_action,
            self.player.stats.health,
            self.opponent.name,
            self.opponent.stats.health,
            self.status
        );

        Ok(TurnOutcome {
            turn: self.turn,
            player_action: action,
            ai_action,
            result: effects,
            status: self.status,
            timestamp,
        })
    }

    /// Termination checks in priority order. The player-loss check runs
    /// first, so a turn that drops both sides to zero is an AI win.
    fn update_status(&mut self) {
        if self.player.stats.is_defeated() {
            self.status = MatchStatus::AiWins;
        } else if self.opponent.stats.is_defeated() {
            self.player.score +=
                WIN_SCORE_BASE + WIN_SCORE_HEALTH_BONUS * self.player.stats.health as u32;
            self.status = MatchStatus::PlayerWins;
        } else if self.turn >= MAX_TURNS {
            self.status = MatchStatus::Draw;
        }
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn log(&self) -> &[TurnRecord] {
        &self.log
    }

    /// The trailing `count` turn records, oldest first.
    pub fn recent_log(&self, count: usize) -> &[TurnRecord] {
        &self.log[self.log.len().saturating_sub(count)..]
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// First 8 characters of a v4 UUID, enough to tell concurrent matches apart.
fn short_match_id() -> String {
    let id = Uuid::new_v4().to_string();
    id[..8].to_string()
}
