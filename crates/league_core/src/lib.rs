//! # league_core - Roster assignment for the league admin console
//!
//! This library holds the state behind the match-creation screen: three
//! disjoint player pools (unassigned, Team A, Team B), the move operation
//! that shuffles players between them, and the match draft that gates
//! submission on squad size.
//!
//! ## Features
//! - Pure move function over a keyed pool collection
//! - Draft phase machine around match submission
//! - REST client for the league backend
//! - JSON API for embedding hosts

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;

pub use api::{ClientError, HttpLeagueClient, RosterSource};
pub use config::{ConfigError, LeagueConfig};
pub use error::{DraftError, RosterError};
pub use models::{
    LiveScore, MatchCreationRequest, MatchSummary, NewPlayer, Player, PlayerId, Team, TeamId,
};
pub use roster::{
    apply_move, Destination, DraftPhase, MatchDraft, MoveCommand, PoolId, RosterState, Side,
    MIN_SQUAD_SIZE,
};
