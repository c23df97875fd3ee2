use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Body of `POST /matches`.
///
/// `team_a_id`/`team_b_id` carry the operator's team selection verbatim; the
/// backend resolves it to a team record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCreationRequest {
    pub title: String,
    pub match_date: Option<NaiveDate>,
    pub venue: String,
    #[serde(rename = "teamAId")]
    pub team_a_id: String,
    #[serde(rename = "teamBId")]
    pub team_b_id: String,
    #[serde(rename = "teamAPlayers")]
    pub team_a_players: Vec<PlayerId>,
    #[serde(rename = "teamBPlayers")]
    pub team_b_players: Vec<PlayerId>,
}

/// A scheduled match as returned by `GET /matches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub match_date: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default, rename = "teamAName")]
    pub team_a_name: Option<String>,
    #[serde(default, rename = "teamBName")]
    pub team_b_name: Option<String>,
}

impl MatchSummary {
    /// One-line label, "Team A vs Team B @ venue (date)", with the same
    /// placeholders the match cards use.
    pub fn label(&self) -> String {
        format!(
            "{} vs {} @ {} ({})",
            self.team_a_name.as_deref().unwrap_or("Team A"),
            self.team_b_name.as_deref().unwrap_or("Team B"),
            self.venue.as_deref().unwrap_or("TBD"),
            self.match_date.as_deref().unwrap_or("TBD"),
        )
    }
}

/// Live score record of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveScore {
    #[serde(default, rename = "scoreTeamA")]
    pub score_team_a: u32,
    #[serde(default, rename = "scoreTeamB")]
    pub score_team_b: u32,
    #[serde(default)]
    pub current_status: Option<String>,
}

/// Body of `POST /teams`: a named team seeded with players by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub players: Vec<PlayerName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerName {
    pub name: String,
}
