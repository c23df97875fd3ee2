use crate::error::ClientError;
use crate::models::{MatchCreationRequest, Player, Team};

/// The backend calls the match screen depends on.
///
/// `MatchDraft` only talks to the backend through this trait, so tests can
/// drive it with an in-memory implementation.
pub trait RosterSource {
    /// Every known player, in backend order. Seeds the unassigned pool.
    fn fetch_players(&mut self) -> Result<Vec<Player>, ClientError>;

    /// Teams for the team selectors.
    fn fetch_teams(&mut self) -> Result<Vec<Team>, ClientError>;

    fn create_match(&mut self, request: &MatchCreationRequest) -> Result<(), ClientError>;
}
