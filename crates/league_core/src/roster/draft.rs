//! Match Draft - the in-progress "create match" form
//!
//! Phases:
//! `Empty -> Editing -> Submitting -> { Empty | Editing }`
//!
//! `Submitting` is only entered when both squads are large enough and both
//! teams are selected; otherwise the submission is refused locally and no
//! request is built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::pool::{PoolId, Side};
use super::state::{MoveCommand, RosterState, MIN_SQUAD_SIZE};
use crate::api::RosterSource;
use crate::error::{DraftError, RosterError};
use crate::models::{MatchCreationRequest, Player, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftPhase {
    /// Nothing touched since the screen was entered or last reset.
    Empty,
    Editing,
    /// Creation request outstanding.
    Submitting,
}

#[derive(Debug, Clone)]
pub struct MatchDraft {
    title: String,
    match_date: Option<NaiveDate>,
    venue: String,
    team_a: String,
    team_b: String,
    roster: RosterState,
    /// Unassigned order right after seeding; used to tell `Empty` from `Editing`.
    baseline: Vec<PlayerId>,
    submitting: bool,
}

impl Default for MatchDraft {
    fn default() -> Self {
        Self::with_roster(RosterState::new())
    }
}

impl MatchDraft {
    /// Fresh draft with every player unassigned.
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        Ok(Self::with_roster(RosterState::seeded(players)?))
    }

    /// Fresh draft seeded from the backend player list.
    pub fn load(source: &mut impl RosterSource) -> Result<Self, DraftError> {
        let players = source.fetch_players().map_err(DraftError::LoadFailed)?;
        info!("Loaded {} players into a new match draft", players.len());
        Ok(Self::new(players)?)
    }

    fn with_roster(roster: RosterState) -> Self {
        Self {
            title: String::new(),
            match_date: None,
            venue: String::new(),
            team_a: String::new(),
            team_b: String::new(),
            baseline: roster.player_ids(PoolId::Unassigned),
            roster,
            submitting: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn match_date(&self) -> Option<NaiveDate> {
        self.match_date
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    pub fn phase(&self) -> DraftPhase {
        if self.submitting {
            DraftPhase::Submitting
        } else if self.is_pristine() {
            DraftPhase::Empty
        } else {
            DraftPhase::Editing
        }
    }

    /// Readiness predicate: both squads reach the minimum size.
    pub fn can_create_match(&self) -> bool {
        self.roster.can_create_match()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), DraftError> {
        self.ensure_editable()?;
        self.title = title.into();
        Ok(())
    }

    pub fn set_match_date(&mut self, date: Option<NaiveDate>) -> Result<(), DraftError> {
        self.ensure_editable()?;
        self.match_date = date;
        Ok(())
    }

    pub fn set_venue(&mut self, venue: impl Into<String>) -> Result<(), DraftError> {
        self.ensure_editable()?;
        self.venue = venue.into();
        Ok(())
    }

    /// Pick the team record a side plays as. Independent of the roster pools.
    pub fn select_team(&mut self, side: Side, team: impl Into<String>) -> Result<(), DraftError> {
        self.ensure_editable()?;
        match side {
            Side::A => self.team_a = team.into(),
            Side::B => self.team_b = team.into(),
        }
        Ok(())
    }

    pub fn move_player(&mut self, command: &MoveCommand) -> Result<(), DraftError> {
        self.ensure_editable()?;
        self.roster.move_player(command)?;
        Ok(())
    }

    pub fn move_by_id(
        &mut self,
        player: PlayerId,
        dest: PoolId,
        index: Option<usize>,
    ) -> Result<(), DraftError> {
        self.ensure_editable()?;
        self.roster.move_by_id(player, dest, index)?;
        Ok(())
    }

    /// Enter `Submitting` and build the creation request.
    pub fn begin_submission(&mut self) -> Result<MatchCreationRequest, DraftError> {
        self.ensure_editable()?;

        if !self.can_create_match() {
            let err = DraftError::NotReady {
                team_a: self.roster.len(PoolId::TeamA),
                team_b: self.roster.len(PoolId::TeamB),
                required: MIN_SQUAD_SIZE,
            };
            warn!("Match submission refused: {}", err);
            return Err(err);
        }

        for side in [Side::A, Side::B] {
            if self.team(side).trim().is_empty() {
                warn!("Match submission refused: no team selected for {}", side);
                return Err(DraftError::MissingTeamSelection(side));
            }
        }

        self.submitting = true;
        Ok(MatchCreationRequest {
            title: self.title.clone(),
            match_date: self.match_date,
            venue: self.venue.clone(),
            team_a_id: self.team_a.clone(),
            team_b_id: self.team_b.clone(),
            team_a_players: self.roster.player_ids(PoolId::TeamA),
            team_b_players: self.roster.player_ids(PoolId::TeamB),
        })
    }

    /// Creation succeeded: clear the form and reseed from `players`.
    ///
    /// A list that cannot seed a roster leaves the draft untouched and still
    /// `Submitting`.
    pub fn complete_submission(&mut self, players: Vec<Player>) -> Result<(), DraftError> {
        let roster = RosterState::seeded(players)?;
        *self = Self::with_roster(roster);
        Ok(())
    }

    /// Creation failed: back to `Editing` with everything retained.
    pub fn fail_submission(&mut self) {
        self.submitting = false;
    }

    /// Run a full submission against the backend.
    ///
    /// On success the draft is reset from a fresh player list. If that
    /// refetch fails or returns an unusable list, the draft's own players
    /// are re-pooled instead. On a backend failure the draft stays editable.
    pub fn submit(&mut self, source: &mut impl RosterSource) -> Result<(), DraftError> {
        let request = self.begin_submission()?;
        info!(
            "Submitting match '{}' ({} vs {}, {}+{} players)",
            request.title,
            request.team_a_id,
            request.team_b_id,
            request.team_a_players.len(),
            request.team_b_players.len()
        );

        if let Err(err) = source.create_match(&request) {
            warn!("Match creation failed: {}", err);
            self.fail_submission();
            return Err(DraftError::SubmissionRejected(err));
        }

        let players = match source.fetch_players() {
            Ok(players) => players,
            Err(err) => {
                warn!("Player refresh after match creation failed, re-pooling draft players: {}", err);
                self.roster.all_players()
            }
        };
        if let Err(err) = self.complete_submission(players) {
            warn!("Refreshed player list unusable after match creation, re-pooling draft players: {}", err);
            self.complete_submission(self.roster.all_players())?;
        }
        info!("Match '{}' created, draft reset", request.title);
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), DraftError> {
        if self.submitting {
            return Err(DraftError::SubmissionInFlight);
        }
        Ok(())
    }

    fn is_pristine(&self) -> bool {
        self.title.is_empty()
            && self.match_date.is_none()
            && self.venue.is_empty()
            && self.team_a.is_empty()
            && self.team_b.is_empty()
            && self.roster.pool(PoolId::TeamA).is_empty()
            && self.roster.pool(PoolId::TeamB).is_empty()
            && self.roster.player_ids(PoolId::Unassigned) == self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::models::Team;

    fn squad(count: u64) -> Vec<Player> {
        (1..=count).map(|i| Player::new(i, format!("P{}", i))).collect()
    }

    /// Draft with players 1..=11 on team A and 12..=22 on team B.
    fn ready_draft() -> MatchDraft {
        let mut draft = MatchDraft::new(squad(22)).unwrap();
        for id in 1..=11 {
            draft.move_by_id(PlayerId(id), PoolId::TeamA, None).unwrap();
        }
        for id in 12..=22 {
            draft.move_by_id(PlayerId(id), PoolId::TeamB, None).unwrap();
        }
        draft.set_title("Cup Final").unwrap();
        draft.set_venue("Central Park").unwrap();
        draft.select_team(Side::A, "Rovers").unwrap();
        draft.select_team(Side::B, "United").unwrap();
        draft
    }

    struct FakeBackend {
        players: Vec<Player>,
        created: Vec<MatchCreationRequest>,
        reject_with: Option<u16>,
        fail_refresh: bool,
        /// Served by `fetch_players` once a match has been created.
        refreshed: Option<Vec<Player>>,
    }

    impl FakeBackend {
        fn new(players: Vec<Player>) -> Self {
            Self { players, created: Vec::new(), reject_with: None, fail_refresh: false, refreshed: None }
        }
    }

    impl RosterSource for FakeBackend {
        fn fetch_players(&mut self) -> Result<Vec<Player>, ClientError> {
            if self.fail_refresh && !self.created.is_empty() {
                return Err(ClientError::Rejected { status: 502, message: "gateway".to_string() });
            }
            if let (Some(refreshed), false) = (&self.refreshed, self.created.is_empty()) {
                return Ok(refreshed.clone());
            }
            Ok(self.players.clone())
        }

        fn fetch_teams(&mut self) -> Result<Vec<Team>, ClientError> {
            Ok(Vec::new())
        }

        fn create_match(&mut self, request: &MatchCreationRequest) -> Result<(), ClientError> {
            if let Some(status) = self.reject_with {
                return Err(ClientError::Rejected { status, message: "nope".to_string() });
            }
            self.created.push(request.clone());
            Ok(())
        }
    }

    #[test]
    fn test_phase_transitions() {
        let mut draft = MatchDraft::new(squad(3)).unwrap();
        assert_eq!(draft.phase(), DraftPhase::Empty);

        draft.move_player(&MoveCommand::new(PoolId::Unassigned, 0, PoolId::Unassigned, 2)).unwrap();
        assert_eq!(draft.phase(), DraftPhase::Editing);

        // Reordering back restores the seeded order.
        draft.move_player(&MoveCommand::new(PoolId::Unassigned, 2, PoolId::Unassigned, 0)).unwrap();
        assert_eq!(draft.phase(), DraftPhase::Empty);

        draft.set_venue("Park").unwrap();
        assert_eq!(draft.phase(), DraftPhase::Editing);
    }

    #[test]
    fn test_cancelled_move_keeps_empty_phase() {
        let mut draft = MatchDraft::new(squad(3)).unwrap();
        draft.move_player(&MoveCommand::cancelled(PoolId::Unassigned, 1)).unwrap();
        assert_eq!(draft.phase(), DraftPhase::Empty);
    }

    #[test]
    fn test_submission_refused_when_squads_short() {
        let mut draft = ready_draft();
        draft.move_by_id(PlayerId(1), PoolId::Unassigned, None).unwrap();

        let err = draft.begin_submission().unwrap_err();
        assert!(matches!(err, DraftError::NotReady { team_a: 10, team_b: 11, required: 11 }));
        assert_eq!(draft.phase(), DraftPhase::Editing);
    }

    #[test]
    fn test_submission_refused_without_team_selection() {
        let mut draft = ready_draft();
        draft.select_team(Side::B, "  ").unwrap();

        let err = draft.begin_submission().unwrap_err();
        assert!(matches!(err, DraftError::MissingTeamSelection(Side::B)));
    }

    #[test]
    fn test_begin_submission_builds_request() {
        let mut draft = ready_draft();
        draft.set_match_date(NaiveDate::from_ymd_opt(2026, 6, 1)).unwrap();

        let request = draft.begin_submission().unwrap();

        assert_eq!(draft.phase(), DraftPhase::Submitting);
        assert_eq!(request.title, "Cup Final");
        assert_eq!(request.match_date, NaiveDate::from_ymd_opt(2026, 6, 1));
        assert_eq!(request.team_a_id, "Rovers");
        assert_eq!(request.team_b_id, "United");
        assert_eq!(request.team_a_players, (1..=11).map(PlayerId).collect::<Vec<_>>());
        assert_eq!(request.team_b_players, (12..=22).map(PlayerId).collect::<Vec<_>>());
    }

    #[test]
    fn test_edits_refused_while_submitting() {
        let mut draft = ready_draft();
        draft.begin_submission().unwrap();

        assert!(matches!(draft.set_title("Other"), Err(DraftError::SubmissionInFlight)));
        assert!(matches!(
            draft.move_by_id(PlayerId(1), PoolId::Unassigned, None),
            Err(DraftError::SubmissionInFlight)
        ));
        assert!(matches!(draft.begin_submission(), Err(DraftError::SubmissionInFlight)));

        draft.fail_submission();
        assert_eq!(draft.phase(), DraftPhase::Editing);
        assert_eq!(draft.title(), "Cup Final");
        assert_eq!(draft.roster().len(PoolId::TeamA), 11);
    }

    #[test]
    fn test_submit_success_resets_draft() {
        let mut backend = FakeBackend::new(squad(25));
        let mut draft = ready_draft();

        draft.submit(&mut backend).unwrap();

        assert_eq!(backend.created.len(), 1);
        assert_eq!(draft.phase(), DraftPhase::Empty);
        assert!(draft.roster().pool(PoolId::TeamA).is_empty());
        assert!(draft.roster().pool(PoolId::TeamB).is_empty());
        assert_eq!(draft.roster().pool(PoolId::Unassigned), squad(25).as_slice());
        assert_eq!(draft.title(), "");
        assert_eq!(draft.venue(), "");
        assert_eq!(draft.team(Side::A), "");
        assert_eq!(draft.team(Side::B), "");
        assert!(draft.match_date().is_none());
    }

    #[test]
    fn test_submit_rejected_keeps_draft() {
        let mut backend = FakeBackend::new(squad(22));
        backend.reject_with = Some(500);
        let mut draft = ready_draft();
        let roster_before = draft.roster().clone();

        let err = draft.submit(&mut backend).unwrap_err();

        assert!(matches!(err, DraftError::SubmissionRejected(ClientError::Rejected { status: 500, .. })));
        assert_eq!(draft.phase(), DraftPhase::Editing);
        assert_eq!(draft.roster(), &roster_before);
        assert_eq!(draft.title(), "Cup Final");

        // Operator retries once the backend recovers.
        backend.reject_with = None;
        draft.submit(&mut backend).unwrap();
        assert_eq!(backend.created.len(), 1);
    }

    #[test]
    fn test_submit_not_ready_sends_nothing() {
        let mut backend = FakeBackend::new(squad(22));
        let mut draft = MatchDraft::new(squad(22)).unwrap();

        assert!(draft.submit(&mut backend).is_err());
        assert!(backend.created.is_empty());
    }

    #[test]
    fn test_refresh_failure_repools_draft_players() {
        let mut backend = FakeBackend::new(squad(22));
        backend.fail_refresh = true;
        let mut draft = ready_draft();

        draft.submit(&mut backend).unwrap();

        assert_eq!(draft.roster().len(PoolId::Unassigned), 22);
        assert!(draft.roster().pool(PoolId::TeamA).is_empty());
        assert_eq!(draft.phase(), DraftPhase::Empty);
    }

    #[test]
    fn test_unusable_refresh_still_resets_draft() {
        let mut backend = FakeBackend::new(squad(22));
        backend.refreshed = Some(vec![Player::new(1, "a"), Player::new(1, "b")]);
        let mut draft = ready_draft();

        draft.submit(&mut backend).unwrap();

        assert_eq!(backend.created.len(), 1);
        assert_eq!(draft.phase(), DraftPhase::Empty);
        assert_eq!(draft.title(), "");
        assert_eq!(draft.team(Side::A), "");
        assert!(draft.roster().pool(PoolId::TeamA).is_empty());
        assert!(draft.roster().pool(PoolId::TeamB).is_empty());
        assert_eq!(draft.roster().len(PoolId::Unassigned), 22);

        // Nothing left to send: a second submit is refused locally.
        assert!(matches!(draft.submit(&mut backend), Err(DraftError::NotReady { .. })));
        assert_eq!(backend.created.len(), 1);
    }

    #[test]
    fn test_complete_submission_with_duplicates_keeps_draft() {
        let mut draft = ready_draft();
        draft.begin_submission().unwrap();

        let err = draft.complete_submission(vec![Player::new(5, "a"), Player::new(5, "b")]).unwrap_err();

        assert!(matches!(err, DraftError::Roster(RosterError::DuplicatePlayer(PlayerId(5)))));
        assert_eq!(draft.phase(), DraftPhase::Submitting);
        assert_eq!(draft.roster().len(PoolId::TeamA), 11);
    }

    #[test]
    fn test_load_from_source() {
        let mut backend = FakeBackend::new(squad(4));
        let draft = MatchDraft::load(&mut backend).unwrap();

        assert_eq!(draft.roster().len(PoolId::Unassigned), 4);
        assert_eq!(draft.phase(), DraftPhase::Empty);
    }
}
