//! Roster pools and the move operation
//!
//! `RosterState` keeps every known player in exactly one pool. All mutation
//! goes through [`RosterState::move_player`] (or its pure twin
//! [`apply_move`]), which either applies a move completely or rejects it
//! without touching any pool.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pool::PoolId;
use crate::error::RosterError;
use crate::models::{Player, PlayerId};

/// Minimum squad size on both sides before a match can be created.
pub const MIN_SQUAD_SIZE: usize = 11;

type PoolMap = BTreeMap<PoolId, Vec<Player>>;

/// Drop target of a move: pool and insertion position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub pool: PoolId,
    pub index: usize,
}

/// A single drag gesture.
///
/// `destination` is `None` when the item was dropped outside every pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCommand {
    pub source: PoolId,
    pub source_index: usize,
    #[serde(default)]
    pub destination: Option<Destination>,
}

impl MoveCommand {
    pub fn new(source: PoolId, source_index: usize, dest_pool: PoolId, dest_index: usize) -> Self {
        Self {
            source,
            source_index,
            destination: Some(Destination { pool: dest_pool, index: dest_index }),
        }
    }

    /// Drag released outside any pool.
    pub fn cancelled(source: PoolId, source_index: usize) -> Self {
        Self { source, source_index, destination: None }
    }
}

/// The three pools of the match screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PoolMap", into = "PoolMap")]
pub struct RosterState {
    pools: PoolMap,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterState {
    /// Three empty pools.
    pub fn new() -> Self {
        Self { pools: PoolId::ALL.iter().map(|id| (*id, Vec::new())).collect() }
    }

    /// All players unassigned, in the given order.
    pub fn seeded(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut pools = PoolMap::new();
        pools.insert(PoolId::Unassigned, players);
        Self::try_from(pools)
    }

    pub fn pool(&self, id: PoolId) -> &[Player] {
        self.pools.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, id: PoolId) -> usize {
        self.pool(id).len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_players() == 0
    }

    pub fn total_players(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn player_ids(&self, id: PoolId) -> Vec<PlayerId> {
        self.pool(id).iter().map(|p| p.id).collect()
    }

    /// Pool and index currently holding `player`.
    pub fn locate(&self, player: PlayerId) -> Option<(PoolId, usize)> {
        PoolId::ALL.iter().find_map(|pool| {
            self.pool(*pool).iter().position(|p| p.id == player).map(|index| (*pool, index))
        })
    }

    /// Every player, unassigned first, then team A, then team B.
    pub fn all_players(&self) -> Vec<Player> {
        PoolId::ALL.iter().flat_map(|pool| self.pool(*pool).iter().cloned()).collect()
    }

    /// Both teams meet the minimum squad size.
    pub fn can_create_match(&self) -> bool {
        self.len(PoolId::TeamA) >= MIN_SQUAD_SIZE && self.len(PoolId::TeamB) >= MIN_SQUAD_SIZE
    }

    /// Apply a drag gesture in place.
    ///
    /// A cancelled gesture is a no-op. Out-of-range indices are rejected with
    /// [`RosterError::InvalidMove`] and leave every pool unchanged.
    pub fn move_player(&mut self, command: &MoveCommand) -> Result<(), RosterError> {
        let Some(dest) = command.destination else {
            debug!("Move from {}[{}] cancelled", command.source, command.source_index);
            return Ok(());
        };

        let source_len = self.len(command.source);
        if command.source_index >= source_len {
            return Err(RosterError::InvalidMove {
                pool: command.source,
                index: command.source_index,
                len: source_len,
            });
        }

        // Same-pool drops index into the sequence after removal.
        let dest_len =
            if dest.pool == command.source { source_len - 1 } else { self.len(dest.pool) };
        if dest.index > dest_len {
            return Err(RosterError::InvalidMove { pool: dest.pool, index: dest.index, len: dest_len });
        }

        let moved = self.pool_mut(command.source).remove(command.source_index);
        debug!(
            "Moved player {} from {}[{}] to {}[{}]",
            moved.id, command.source, command.source_index, dest.pool, dest.index
        );
        self.pool_mut(dest.pool).insert(dest.index, moved);
        Ok(())
    }

    /// Move a player by id. `index` is clamped to the end of the destination.
    pub fn move_by_id(
        &mut self,
        player: PlayerId,
        dest_pool: PoolId,
        index: Option<usize>,
    ) -> Result<(), RosterError> {
        let (source, source_index) =
            self.locate(player).ok_or(RosterError::UnknownPlayer(player))?;

        let dest_len =
            if dest_pool == source { self.len(dest_pool) - 1 } else { self.len(dest_pool) };
        let dest_index = index.map_or(dest_len, |i| i.min(dest_len));

        self.move_player(&MoveCommand::new(source, source_index, dest_pool, dest_index))
    }

    /// Empty both teams and reseed the unassigned pool.
    pub fn reset(&mut self, players: Vec<Player>) -> Result<(), RosterError> {
        *self = Self::seeded(players)?;
        Ok(())
    }

    fn pool_mut(&mut self, id: PoolId) -> &mut Vec<Player> {
        self.pools.entry(id).or_default()
    }
}

impl TryFrom<PoolMap> for RosterState {
    type Error = RosterError;

    fn try_from(mut pools: PoolMap) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for player in pools.values().flatten() {
            if !seen.insert(player.id) {
                return Err(RosterError::DuplicatePlayer(player.id));
            }
        }

        for id in PoolId::ALL {
            pools.entry(id).or_default();
        }
        Ok(Self { pools })
    }
}

impl From<RosterState> for PoolMap {
    fn from(state: RosterState) -> Self {
        state.pools
    }
}

/// Pure form of [`RosterState::move_player`]: returns the next state and
/// leaves `state` untouched.
pub fn apply_move(state: &RosterState, command: &MoveCommand) -> Result<RosterState, RosterError> {
    let mut next = state.clone();
    next.move_player(command)?;
    Ok(next)
}
