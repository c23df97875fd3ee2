use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity of one of the three roster pools.
///
/// Wire names match the drop-zone ids of the match screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PoolId {
    #[serde(rename = "players")]
    Unassigned,
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
}

impl PoolId {
    pub const ALL: [PoolId; 3] = [PoolId::Unassigned, PoolId::TeamA, PoolId::TeamB];

    pub fn code(&self) -> &'static str {
        match self {
            PoolId::Unassigned => "players",
            PoolId::TeamA => "teamA",
            PoolId::TeamB => "teamB",
        }
    }

    /// Team side backed by this pool, `None` for the unassigned pool.
    pub fn side(&self) -> Option<Side> {
        match self {
            PoolId::Unassigned => None,
            PoolId::TeamA => Some(Side::A),
            PoolId::TeamB => Some(Side::B),
        }
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PoolId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "players" | "unassigned" | "pool" => Ok(PoolId::Unassigned),
            "teamA" | "a" | "A" => Ok(PoolId::TeamA),
            "teamB" | "b" | "B" => Ok(PoolId::TeamB),
            other => Err(format!("unknown pool '{}'", other)),
        }
    }
}

/// One of the two competing sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn pool(&self) -> PoolId {
        match self {
            Side::A => PoolId::TeamA,
            Side::B => PoolId::TeamB,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("team A"),
            Side::B => f.write_str("team B"),
        }
    }
}
