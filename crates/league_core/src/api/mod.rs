pub mod client;
pub mod http;
pub mod roster_json;

pub use crate::error::ClientError;
pub use client::RosterSource;
pub use http::HttpLeagueClient;
pub use roster_json::{move_player_json, roster_status_json, ApiError, ApiResponse, API_VERSION};
