//! JSON API for roster operations
//!
//! String-in/string-out endpoints for hosts that embed the roster model and
//! keep the state on their side. Every call returns an [`ApiResponse`]
//! envelope; malformed input never panics.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::RosterError;
use crate::roster::{apply_move, MoveCommand, PoolId, RosterState, MIN_SQUAD_SIZE};

/// Envelope version stamped on every roster response.
pub const API_VERSION: &str = "v1";

/// Roster response envelope: `data` on success, `error` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Machine-readable failure; `details` carries the offending pool and index
/// for rejected moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

/// Move request: current state plus one drag gesture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub schema_version: Option<String>,
    pub state: RosterState,
    #[serde(rename = "move")]
    pub command: MoveCommand,
}

/// Pool sizes and readiness of a roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStatus {
    pub unassigned: usize,
    pub team_a: usize,
    pub team_b: usize,
    pub min_squad_size: usize,
    pub can_create_match: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveResponse {
    pub state: RosterState,
    pub status: RosterStatus,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: None }
    }

    pub fn from_roster_error(error: &RosterError) -> Self {
        match error {
            RosterError::InvalidMove { pool, index, len } => {
                let details = HashMap::from([
                    ("pool".to_string(), serde_json::json!(pool)),
                    ("index".to_string(), serde_json::json!(index)),
                    ("len".to_string(), serde_json::json!(len)),
                ]);
                Self { details: Some(details), ..Self::new("INVALID_MOVE", &error.to_string()) }
            }
            RosterError::DuplicatePlayer(_) => Self::new("DUPLICATE_PLAYER", &error.to_string()),
            RosterError::UnknownPlayer(_) => Self::new("UNKNOWN_PLAYER", &error.to_string()),
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

impl RosterStatus {
    pub fn of(state: &RosterState) -> Self {
        Self {
            unassigned: state.len(PoolId::Unassigned),
            team_a: state.len(PoolId::TeamA),
            team_b: state.len(PoolId::TeamB),
            min_squad_size: MIN_SQUAD_SIZE,
            can_create_match: state.can_create_match(),
        }
    }
}

fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        error!("Failed to serialize API response: {}", e);
        r#"{"success":false,"data":null,"error":{"code":"SERIALIZATION_ERROR","message":"Failed to serialize response","details":null},"schema_version":"v1","timestamp":null}"#.to_string()
    })
}

/// Apply one move to a caller-held state.
pub fn move_player_json(request_json: &str) -> String {
    debug!("Processing roster move request");

    let request: MoveRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse MoveRequest: {}", e);
            let error = ApiError::new("INVALID_REQUEST", &format!("Invalid JSON: {}", e));
            return to_json(&ApiResponse::<MoveResponse>::error(error));
        }
    };

    match apply_move(&request.state, &request.command) {
        Ok(state) => {
            let status = RosterStatus::of(&state);
            to_json(&ApiResponse::success(MoveResponse { state, status }))
        }
        Err(e) => {
            warn!("Roster move rejected: {}", e);
            to_json(&ApiResponse::<MoveResponse>::error(ApiError::from_roster_error(&e)))
        }
    }
}

/// Pool sizes and readiness for a caller-held state.
pub fn roster_status_json(state_json: &str) -> String {
    match serde_json::from_str::<RosterState>(state_json) {
        Ok(state) => to_json(&ApiResponse::success(RosterStatus::of(&state))),
        Err(e) => {
            error!("Failed to parse RosterState: {}", e);
            let error = ApiError::new("INVALID_REQUEST", &format!("Invalid JSON: {}", e));
            to_json(&ApiResponse::<RosterStatus>::error(error))
        }
    }
}
