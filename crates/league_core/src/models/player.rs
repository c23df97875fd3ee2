use std::fmt;

use serde::{Deserialize, Serialize};

use super::team::TeamRef;

/// Backend identifier of a player. Stable for the lifetime of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rostered player as the backend lists it.
///
/// The roster model only relies on `id` and `name`; the remaining fields are
/// carried along for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Player {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id: PlayerId(id), name: name.into(), age: None, position: None, avatar: None }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Some(position) => write!(f, "#{} {} ({})", self.id, self.name, position),
            None => write!(f, "#{} {}", self.id, self.name),
        }
    }
}

/// Body for creating or updating a player record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub age: Option<u32>,
    pub position: Option<String>,
    pub avatar: Option<String>,
    /// Team the player belongs to; `null` leaves them teamless.
    pub team: Option<TeamRef>,
}
