//! Session layer: thread-safe ownership of a single active match.
//!
//! A `GameSession` holds at most one `BattleEngine` behind a mutex. Starting
//! a match replaces whatever was there; a finished match stays readable
//! through `stats` until the next start. Callers can hold as many
//! independent sessions as they like, each with its own match.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::engine::BattleEngine;
use crate::error::BattleError;
use crate::models::{Action, Difficulty, MatchStatus, Opponent, Player, TurnEffects, TurnRecord};

/// How many trailing turn records a stats read returns.
pub const RECENT_LOG_LEN: usize = 10;

/// Starting state of a freshly created match.
#[derive(Debug, Clone)]
pub struct MatchOverview {
    pub match_id: String,
    pub player: Player,
    pub ai: Opponent,
}

/// Everything a caller needs to render one resolved turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub turn: u32,
    pub player_action: Action,
    pub ai_action: Action,
    pub result: TurnEffects,
    pub player: Player,
    pub ai: Opponent,
    pub status: MatchStatus,
    /// When the turn resolved; shared with the match log record.
    pub timestamp: DateTime<Utc>,
}

/// Point-in-time summary of the current match.
#[derive(Debug, Clone)]
pub struct MatchStats {
    pub match_id: String,
    pub turn_count: u32,
    pub status: MatchStatus,
    /// The trailing turns, oldest first, capped at `RECENT_LOG_LEN`.
    pub recent_log: Vec<TurnRecord>,
    pub player: Player,
    pub ai: Opponent,
}

/// Owner of the current match, safe to share across threads.
pub struct GameSession {
    inner: Mutex<Option<BattleEngine>>,
}

impl GameSession {
    pub fn new() -> Self {
        Self { inner: Mutex::new(None) }
    }

    /// Start a new match, discarding any previous one.
    pub fn start(&self, difficulty: Difficulty) -> MatchOverview {
        self.install(BattleEngine::new(difficulty))
    }

    /// Start a new match with a fixed seed, discarding any previous one.
    pub fn start_seeded(&self, difficulty: Difficulty, seed: u64) -> MatchOverview {
        self.install(BattleEngine::with_seed(difficulty, seed))
    }

    fn install(&self, engine: BattleEngine) -> MatchOverview {
        let overview = MatchOverview {
            match_id: engine.match_id().to_string(),
            player: engine.player().clone(),
            ai: engine.opponent().clone(),
        };
        let mut guard = self.inner.lock().expect("session lock poisoned");
        *guard = Some(engine);
        overview
    }

    /// Play one turn of the current match.
    ///
    /// The energy check happens here, before the engine runs, so a refused
    /// action leaves the match exactly as it was.
    pub fn submit(&self, action: Action) -> Result<TurnReport, BattleError> {
        let mut guard = self.inner.lock().expect("session lock poisoned");
        let engine = guard.as_mut().ok_or(BattleError::NoActiveMatch)?;
        if engine.status().is_terminal() {
            return Err(BattleError::NoActiveMatch);
        }

        let required = action.energy_cost();
        let available = engine.player().stats.energy;
        if available < required {
            return Err(BattleError::InsufficientEnergy { action, required, available });
        }

        let outcome = engine.submit_action(action)?;
        Ok(TurnReport {
            turn: outcome.turn,
            player_action: outcome.player_action,
            ai_action: outcome.ai_action,
            result: outcome.result,
            player: engine.player().clone(),
            ai: engine.opponent().clone(),
            status: outcome.status,
            timestamp: outcome.timestamp,
        })
    }

    /// Summary of the current match. Works on finished matches too; only a
    /// session that never started (or was never restarted) has nothing to
    /// report.
    pub fn stats(&self) -> Result<MatchStats, BattleError> {
        let guard = self.inner.lock().expect("session lock poisoned");
        let engine = guard.as_ref().ok_or(BattleError::NoActiveMatch)?;
        Ok(MatchStats {
            match_id: engine.match_id().to_string(),
            turn_count: engine.turn(),
            status: engine.status(),
            recent_log: engine.recent_log(RECENT_LOG_LEN).to_vec(),
            player: engine.player().clone(),
            ai: engine.opponent().clone(),
        })
    }

    /// True while a match exists and has not reached a terminal status.
    pub fn is_active(&self) -> bool {
        let guard = self.inner.lock().expect("session lock poisoned");
        guard.as_ref().map_or(false, |engine| !engine.status().is_terminal())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
