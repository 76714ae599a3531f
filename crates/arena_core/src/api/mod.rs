pub mod battle_json;

pub use battle_json::{
    game_stats_json, start_game_json, submit_action_json, ApiError, ApiResponse,
    GameStatsResponse, OpponentDetails, OpponentSnapshot, PlayerSnapshot, StartGameRequest,
    StartGameResponse, SubmitActionRequest, SubmitActionResponse, API_VERSION,
};
