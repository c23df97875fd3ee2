use thiserror::Error;

use crate::models::PlayerId;
use crate::roster::{PoolId, Side};

/// Errors raised by the roster pools themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// An index outside the pool was supplied. The UI only hands out valid
    /// indices, so this is a caller bug rather than a runtime condition.
    #[error("Invalid move: index {index} out of range for pool {pool} (len {len})")]
    InvalidMove { pool: PoolId, index: usize, len: usize },

    #[error("Player {0} is listed more than once")]
    DuplicatePlayer(PlayerId),

    #[error("Player {0} is not in any pool")]
    UnknownPlayer(PlayerId),
}

/// Errors talking to the league backend.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Whether re-submitting the same request may succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::Http(_) => true,
            ClientError::Rejected { status, .. } => *status >= 500 || *status == 408 || *status == 429,
            ClientError::Decode(_) => false,
            ClientError::InvalidUrl(_) => false,
        }
    }
}

/// Errors of the match draft.
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Both teams must have at least {required} players (team A: {team_a}, team B: {team_b})")]
    NotReady { team_a: usize, team_b: usize, required: usize },

    #[error("No team selected for {0}")]
    MissingTeamSelection(Side),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Failed to load players: {0}")]
    LoadFailed(#[source] ClientError),

    /// The backend refused or failed the creation call. The draft is left
    /// editable so the operator can retry.
    #[error("Match creation failed: {0}")]
    SubmissionRejected(#[source] ClientError),
}

impl DraftError {
    /// Refused locally, nothing was sent.
    pub fn is_local(&self) -> bool {
        !matches!(self, DraftError::SubmissionRejected(_) | DraftError::LoadFailed(_))
    }
}
