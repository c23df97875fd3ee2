//! Match plan files
//!
//! A plan is the scripted equivalent of filling in the match screen: form
//! fields plus the player ids to drag onto each team, in order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use league_core::{MatchDraft, PlayerId, PoolId, Side};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlan {
    pub title: String,
    #[serde(default)]
    pub match_date: Option<NaiveDate>,
    #[serde(default)]
    pub venue: String,
    pub team_a: String,
    pub team_b: String,
    #[serde(rename = "teamAPlayers")]
    pub team_a_players: Vec<PlayerId>,
    #[serde(rename = "teamBPlayers")]
    pub team_b_players: Vec<PlayerId>,
}

impl MatchPlan {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse plan file {}", path.display()))
    }

    /// Fill `draft` with the plan: form fields first, then one drag per
    /// player onto the end of its team.
    pub fn apply(&self, draft: &mut MatchDraft) -> Result<()> {
        draft.set_title(self.title.clone())?;
        draft.set_match_date(self.match_date)?;
        draft.set_venue(self.venue.clone())?;
        draft.select_team(Side::A, self.team_a.clone())?;
        draft.select_team(Side::B, self.team_b.clone())?;

        for (pool, ids) in [(PoolId::TeamA, &self.team_a_players), (PoolId::TeamB, &self.team_b_players)] {
            for id in ids {
                draft
                    .move_by_id(*id, pool, None)
                    .with_context(|| format!("Cannot move player {} to {}", id, pool))?;
            }
        }
        Ok(())
    }
}
