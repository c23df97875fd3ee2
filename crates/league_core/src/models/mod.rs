pub mod match_info;
pub mod player;
pub mod team;

pub use match_info::{LiveScore, MatchCreationRequest, MatchSummary, NewTeam, PlayerName};
pub use player::{NewPlayer, Player, PlayerId};
pub use team::{Team, TeamId, TeamRef};
