//! REST client for the league backend
//!
//! Thin blocking wrapper over `reqwest`. Every non-2xx answer becomes
//! [`ClientError::Rejected`] carrying the status and the response body.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::client::RosterSource;
use crate::config::LeagueConfig;
use crate::error::ClientError;
use crate::models::{
    LiveScore, MatchCreationRequest, MatchSummary, NewPlayer, NewTeam, Player, PlayerId, Team,
    TeamId,
};

pub struct HttpLeagueClient {
    client: Client,
    base_url: String,
}

impl HttpLeagueClient {
    pub fn new(config: &LeagueConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn fetch_matches(&self) -> Result<Vec<MatchSummary>, ClientError> {
        self.get_json("matches")
    }

    pub fn create_player(&self, player: &NewPlayer) -> Result<Player, ClientError> {
        Self::decode(self.send(self.client.post(self.url("players")).json(player))?)
    }

    pub fn update_player(&self, id: PlayerId, player: &NewPlayer) -> Result<Player, ClientError> {
        Self::decode(self.send(self.client.put(self.url(&format!("players/{}", id))).json(player))?)
    }

    pub fn delete_player(&self, id: PlayerId) -> Result<(), ClientError> {
        self.send(self.client.delete(self.url(&format!("players/{}", id))))?;
        Ok(())
    }

    pub fn create_team(&self, team: &NewTeam) -> Result<Team, ClientError> {
        Self::decode(self.send(self.client.post(self.url("teams")).json(team))?)
    }

    /// Rename a team, keeping the rest of the record as the backend has it.
    pub fn rename_team(&self, team: &Team, name: &str) -> Result<Team, ClientError> {
        let updated = Team { name: name.to_string(), ..team.clone() };
        Self::decode(
            self.send(self.client.put(self.url(&format!("teams/{}", team.id))).json(&updated))?,
        )
    }

    pub fn delete_team(&self, id: TeamId) -> Result<(), ClientError> {
        self.send(self.client.delete(self.url(&format!("teams/{}", id))))?;
        Ok(())
    }

    pub fn fetch_live_score(&self, match_id: u64) -> Result<LiveScore, ClientError> {
        self.get_json(&format!("livescore/match/{}", match_id))
    }

    pub fn update_live_score(&self, match_id: u64, score: &LiveScore) -> Result<LiveScore, ClientError> {
        let url = self.url(&format!("livescore/match/{}", match_id));
        Self::decode(self.send(self.client.put(url).json(score))?)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        Self::decode(self.send(self.client.get(self.url(path)))?)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send()?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().unwrap_or_default();
        Err(ClientError::Rejected { status: status.as_u16(), message })
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl RosterSource for HttpLeagueClient {
    fn fetch_players(&mut self) -> Result<Vec<Player>, ClientError> {
        self.get_json("players")
    }

    fn fetch_teams(&mut self) -> Result<Vec<Team>, ClientError> {
        self.get_json("teams")
    }

    fn create_match(&mut self, request: &MatchCreationRequest) -> Result<(), ClientError> {
        self.send(self.client.post(self.url("matches")).json(request))?;
        Ok(())
    }
}
