use std::fmt;

use serde::{Deserialize, Serialize};

use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A team record. Only feeds the team selectors; the roster pools never read
/// `players`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn has_player_named(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    pub fn to_ref(&self) -> TeamRef {
        TeamRef { id: self.id, name: self.name.clone() }
    }
}

/// Lightweight team reference embedded in player bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}
