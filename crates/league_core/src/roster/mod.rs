//! Roster assignment for match composition.
//!
//! Players live in exactly one of three pools. `state` owns the pools and the
//! move operation, `draft` wraps them with the match form and the submission
//! phases.

pub mod draft;
pub mod pool;
pub mod state;

pub use draft::{DraftPhase, MatchDraft};
pub use pool::{PoolId, Side};
pub use state::{apply_move, Destination, MoveCommand, RosterState, MIN_SQUAD_SIZE};
