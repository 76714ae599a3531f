//! JSON API for battle operations
//!
//! This module provides string-in/string-out endpoints over a `GameSession`,
//! wrapping every reply in a standard response envelope for embedding
//! frontends.

use crate::error::BattleError;
use crate::models::{
    Action, Difficulty, MatchStatus, Opponent, Player, SkillSet, TurnEffects, TurnRecord,
};
use crate::session::GameSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with codes and details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

/// Match start request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartGameRequest {
    /// Opponent tier; unknown or missing values fall back to `medium`.
    pub difficulty: Option<String>,
    /// Fixed RNG seed for reproducible matches.
    pub seed: Option<u64>,
}

/// Match start response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartGameResponse {
    pub match_id: String,
    pub message: String,
    pub player: PlayerSnapshot,
    pub ai: OpponentSnapshot,
}

/// Action submission request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitActionRequest {
    pub action: String,
}

/// One resolved turn as rendered to the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitActionResponse {
    pub turn: u32,
    pub player_action: Action,
    pub ai_action: Action,
    pub result: TurnEffects,
    pub player: PlayerSnapshot,
    pub ai: OpponentSnapshot,
    pub game_status: MatchStatus,
    /// The log record written for this turn.
    pub log: TurnRecord,
}

/// Match summary response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStatsResponse {
    pub match_id: String,
    pub turn_count: u32,
    /// Trailing turn records, oldest first.
    pub game_log: Vec<TurnRecord>,
    pub player: PlayerSnapshot,
    pub ai: OpponentDetails,
}

/// Player state as rendered in responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub health: i32,
    pub energy: i32,
    pub score: u32,
    pub moves: Vec<Action>,
}

/// Opponent state as rendered in start and turn responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentSnapshot {
    pub name: String,
    pub health: i32,
    pub energy: i32,
}

/// Opponent state including skills, for stats responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentDetails {
    pub name: String,
    pub health: i32,
    pub energy: i32,
    pub skills: SkillSet,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            health: player.stats.health,
            energy: player.stats.energy,
            score: player.score,
            moves: player.moves.clone(),
        }
    }
}

impl From<&Opponent> for OpponentSnapshot {
    fn from(opponent: &Opponent) -> Self {
        Self {
            name: opponent.name.clone(),
            health: opponent.stats.health,
            energy: opponent.stats.energy,
        }
    }
}

impl From<&Opponent> for OpponentDetails {
    fn from(opponent: &Opponent) -> Self {
        Self {
            name: opponent.name.clone(),
            health: opponent.stats.health,
            energy: opponent.stats.energy,
            skills: opponent.skills,
        }
    }
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: None }
    }

    pub fn with_details(
        code: &str,
        message: &str,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: Some(details) }
    }

    pub fn from_battle_error(error: &BattleError) -> Self {
        match error {
            BattleError::InsufficientEnergy { required, available, .. } => {
                let mut details = HashMap::new();
                details.insert("required".to_string(), serde_json::Value::from(*required));
                details.insert("available".to_string(), serde_json::Value::from(*available));
                Self::with_details(error.code(), &error.to_string(), details)
            }
            _ => Self::new(error.code(), &error.to_string()),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Start a new match from a JSON request string
///
/// # Arguments
/// * `request_json` - JSON string containing StartGameRequest
/// * `session` - Session that will own the new match
///
/// # Returns
/// JSON string containing ApiResponse<StartGameResponse>
pub fn start_game_json(request_json: &str, session: &GameSession) -> String {
    info!("Processing match start request");

    // Parse the request
    let request: StartGameRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse StartGameRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            let response: ApiResponse<StartGameResponse> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    // Unknown difficulty tokens fall back to the default tier rather than
    // failing the request.
    let difficulty = Difficulty::from_request(request.difficulty.as_deref());
    let overview = match request.seed {
        Some(seed) => session.start_seeded(difficulty, seed),
        None => session.start(difficulty),
    };
    info!("Started match {} against {}", overview.match_id, overview.ai.name);

    let response = ApiResponse::success(StartGameResponse {
        match_id: overview.match_id.clone(),
        message: format!("New game started against {}!", overview.ai.name),
        player: PlayerSnapshot::from(&overview.player),
        ai: OpponentSnapshot::from(&overview.ai),
    });
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

/// Play one turn from a JSON request string
///
/// # Arguments
/// * `request_json` - JSON string containing SubmitActionRequest
/// * `session` - Session owning the current match
///
/// # Returns
/// JSON string containing ApiResponse<SubmitActionResponse>
pub fn submit_action_json(request_json: &str, session: &GameSession) -> String {
    // Parse the request
    let request: SubmitActionRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse SubmitActionRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            let response: ApiResponse<SubmitActionResponse> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    // Validate the action token
    let action: Action = match request.action.parse() {
        Ok(action) => action,
        Err(e) => {
            warn!("Rejected action token {:?}", request.action);
            let response: ApiResponse<SubmitActionResponse> =
                ApiResponse::error(ApiError::from_battle_error(&e));
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    match session.submit(action) {
        Ok(report) => {
            info!(
                "Turn {} resolved: {} vs {} ({:?})",
                report.turn, report.player_action, report.ai_action, report.status
            );
            let response = ApiResponse::success(SubmitActionResponse {
                turn: report.turn,
                player_action: report.player_action,
                ai_action: report.ai_action,
                result: report.result.clone(),
                player: PlayerSnapshot::from(&report.player),
                ai: OpponentSnapshot::from(&report.ai),
                game_status: report.status,
                log: TurnRecord {
                    turn: report.turn,
                    player_action: report.player_action,
                    ai_action: report.ai_action,
                    result: report.result,
                    timestamp: report.timestamp,
                },
            });
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
        Err(e) => {
            warn!("Action refused: {}", e);
            let response: ApiResponse<SubmitActionResponse> =
                ApiResponse::error(ApiError::from_battle_error(&e));
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Summarize the current match
///
/// # Arguments
/// * `session` - Session owning the current match
///
/// # Returns
/// JSON string containing ApiResponse<GameStatsResponse>
pub fn game_stats_json(session: &GameSession) -> String {
    debug!("Processing match stats request");

    match session.stats() {
        Ok(stats) => {
            let response = ApiResponse::success(GameStatsResponse {
                match_id: stats.match_id,
                turn_count: stats.turn_count,
                game_log: stats.recent_log,
                player: PlayerSnapshot::from(&stats.player),
                ai: OpponentDetails::from(&stats.ai),
            });
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
        Err(e) => {
            warn!("Stats unavailable: {}", e);
            let response: ApiResponse<GameStatsResponse> =
                ApiResponse::error(ApiError::from_battle_error(&e));
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_request_json(difficulty: &str, seed: u64) -> String {
        serde_json::json!({
            "difficulty": difficulty,
            "seed": seed
        })
        .to_string()
    }

    #[test]
    fn test_start_game_json_workflow() {
        let session = GameSession::new();
        let response = start_game_json(&start_request_json("easy", 12345), &session);

        let result: ApiResponse<StartGameResponse> =
            serde_json::from_str(&response).expect("Should parse start response");

        assert!(result.success);
        assert_eq!(result.schema_version, "v1");
        assert!(result.error.is_none());

        let data = result.data.unwrap();
        assert_eq!(data.match_id.len(), 8);
        assert_eq!(data.message, "New game started against AI-EASY!");
        assert_eq!(data.player.health, 100);
        assert_eq!(data.player.energy, 100);
        assert_eq!(data.player.score, 0);
        assert!(data.player.moves.is_empty());
        assert_eq!(data.ai.name, "AI-EASY");
        assert_eq!(data.ai.health, 100);
    }

    #[test]
    fn test_start_game_rejects_malformed_json() {
        let session = GameSession::new();
        let response = start_game_json("definitely not json", &session);

        let result: ApiResponse<StartGameResponse> = serde_json::from_str(&response).unwrap();
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.error.unwrap().code, "INVALID_JSON");
        assert!(!session.is_active());
    }

    #[test]
    fn test_start_game_unknown_difficulty_defaults_to_medium() {
        let session = GameSession::new();
        let response = start_game_json(&start_request_json("nightmare", 1), &session);

        let result: ApiResponse<StartGameResponse> = serde_json::from_str(&response).unwrap();
        assert!(result.success);
        assert_eq!(result.data.unwrap().ai.name, "AI-MEDIUM");
    }

    #[test]
    fn test_start_game_empty_request_defaults_to_medium() {
        let session = GameSession::new();
        let response = start_game_json("{}", &session);

        let result: ApiResponse<StartGameResponse> = serde_json::from_str(&response).unwrap();
        assert!(result.success);
        assert_eq!(result.data.unwrap().ai.name, "AI-MEDIUM");
    }

    #[test]
    fn test_submit_without_match_reports_no_active_match() {
        let session = GameSession::new();
        let response = submit_action_json(r#"{"action": "attack"}"#, &session);

        let result: ApiResponse<SubmitActionResponse> = serde_json::from_str(&response).unwrap();
        assert!(!result.success);
        assert_eq!(result.error.unwrap().code, "NO_ACTIVE_MATCH");
    }

    #[test]
    fn test_submit_rejects_unknown_action_token() {
        let session = GameSession::new();
        start_game_json(&start_request_json("medium", 7), &session);

        let response = submit_action_json(r#"{"action": "fireball"}"#, &session);
        let result: ApiResponse<SubmitActionResponse> = serde_json::from_str(&response).unwrap();
        assert!(!result.success);
        assert_eq!(result.error.unwrap().code, "INVALID_ACTION");

        // The refused submission consumed no turn.
        let stats: ApiResponse<GameStatsResponse> =
            serde_json::from_str(&game_stats_json(&session)).unwrap();
        assert_eq!(stats.data.unwrap().turn_count, 0);
    }

    #[test]
    fn test_submit_action_json_workflow() {
        let session = GameSession::new();
        start_game_json(&start_request_json("medium", 7), &session);

        let response = submit_action_json(r#"{"action": "defend"}"#, &session);
        let result: ApiResponse<SubmitActionResponse> =
            serde_json::from_str(&response).expect("Should parse submit response");

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data.turn, 1);
        assert_eq!(data.player_action, Action::Defend);
        assert_eq!(data.game_status, MatchStatus::Ongoing);
        assert_eq!(data.player.moves, vec![Action::Defend]);
        assert!((0..=100).contains(&data.player.health));
        assert!(data.ai.health >= 80);
        assert_eq!(data.log.turn, 1);
        assert_eq!(data.log.result, data.result);
    }

    #[test]
    fn test_submit_response_wire_shape() {
        let session = GameSession::new();
        start_game_json(&start_request_json("medium", 7), &session);

        let raw = submit_action_json(r#"{"action": "defend"}"#, &session);
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["success"], serde_json::json!(true));
        assert_eq!(value["schema_version"], serde_json::json!("v1"));
        let data = &value["data"];
        assert_eq!(data["turn"], serde_json::json!(1));
        assert_eq!(data["player_action"], serde_json::json!("defend"));
        assert_eq!(data["game_status"], serde_json::json!("ongoing"));
        assert_eq!(data["player"]["moves"], serde_json::json!(["defend"]));
        assert!(data["ai_action"].is_string());
        assert!(data["result"]["special_effects"].as_array().unwrap().is_empty());
        assert!(data["log"]["timestamp"].is_string());
    }

    #[test]
    fn test_api_error_carries_energy_details() {
        let err = BattleError::InsufficientEnergy {
            action: Action::Special,
            required: 25,
            available: 10,
        };
        let api = ApiError::from_battle_error(&err);
        assert_eq!(api.code, "INSUFFICIENT_ENERGY");
        let details = api.details.unwrap();
        assert_eq!(details["required"], serde_json::json!(25));
        assert_eq!(details["available"], serde_json::json!(10));
    }

    #[test]
    fn test_game_stats_json_without_match() {
        let session = GameSession::new();
        let response = game_stats_json(&session);

        let result: ApiResponse<GameStatsResponse> = serde_json::from_str(&response).unwrap();
        assert!(!result.success);
        assert_eq!(result.error.unwrap().code, "NO_ACTIVE_MATCH");
    }

    #[test]
    fn test_game_stats_json_workflow() {
        let session = GameSession::new();
        start_game_json(&start_request_json("easy", 99), &session);
        for _ in 0..3 {
            let response = submit_action_json(r#"{"action": "defend"}"#, &session);
            let result: ApiResponse<SubmitActionResponse> =
                serde_json::from_str(&response).unwrap();
            assert!(result.success);
        }

        let response = game_stats_json(&session);
        let result: ApiResponse<GameStatsResponse> =
            serde_json::from_str(&response).expect("Should parse stats response");

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data.match_id.len(), 8);
        assert_eq!(data.turn_count, 3);
        assert_eq!(data.game_log.len(), 3);
        assert_eq!(data.game_log.last().unwrap().turn, 3);
        assert_eq!(data.player.moves.len(), 3);
        assert_eq!(data.ai.name, "AI-EASY");
        for skill in [data.ai.skills.attack, data.ai.skills.defense] {
            assert!((30..=50).contains(&skill));
        }
    }
}
