//! In-memory host used by the coordinator tests.

use crate::host::{Chat, Game, Players, Voter};
use forfeit_common::types::{ClientId, GamePhase, MatchState, SteamId, Team};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
struct FakePlayer {
    client_id: ClientId,
    steam_id: SteamId,
    team: Team,
}

#[derive(Debug, Default)]
struct FakeHostState {
    players: Vec<FakePlayer>,
    match_state: Option<MatchState>,
    broadcasts: Vec<String>,
    direct: Vec<(ClientId, String)>,
    end_match_calls: usize,
}

/// A host whose players, teams and score are set by the test, and which
/// records everything the coordinator sends. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    state: Arc<Mutex<FakeHostState>>,
}

impl FakeHost {
    pub fn new(match_state: MatchState) -> Self {
        let host = Self::default();
        host.set_match_state(Some(match_state));
        host
    }

    /// A host with an active match at the given score.
    pub fn playing(red_score: u32, blue_score: u32) -> Self {
        Self::new(MatchState::new(GamePhase::Active, red_score, blue_score))
    }

    fn lock(&self) -> MutexGuard<'_, FakeHostState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Adds a player, or moves an existing one to `team`.
    pub fn join(&self, client_id: u64, steam_id: &str, team: Team) -> &Self {
        let steam_id = SteamId::new(steam_id).unwrap_or_else(|e| panic!("{}", e));
        let mut state = self.lock();
        state.players.retain(|p| p.steam_id != steam_id);
        state.players.push(FakePlayer {
            client_id: ClientId::new(client_id),
            steam_id,
            team,
        });
        self
    }

    pub fn leave(&self, steam_id: &str) {
        self.lock().players.retain(|p| p.steam_id.as_str() != steam_id);
    }

    pub fn set_match_state(&self, match_state: Option<MatchState>) {
        self.lock().match_state = match_state;
    }

    pub fn set_phase(&self, phase: GamePhase) {
        if let Some(state) = self.lock().match_state.as_mut() {
            state.phase = phase;
        }
    }

    pub fn set_score(&self, red_score: u32, blue_score: u32) {
        if let Some(state) = self.lock().match_state.as_mut() {
            state.red_score = red_score;
            state.blue_score = blue_score;
        }
    }

    pub fn broadcasts(&self) -> Vec<String> {
        self.lock().broadcasts.clone()
    }

    /// Messages sent to a single client.
    pub fn messages_to(&self, client_id: u64) -> Vec<String> {
        self.lock()
            .direct
            .iter()
            .filter(|(id, _)| id.get() == client_id)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn direct_message_count(&self) -> usize {
        self.lock().direct.len()
    }

    pub fn end_match_calls(&self) -> usize {
        self.lock().end_match_calls
    }

    pub fn clear_messages(&self) {
        let mut state = self.lock();
        state.broadcasts.clear();
        state.direct.clear();
    }
}

impl Players for FakeHost {
    fn resolve_voter(&self, client_id: ClientId) -> Option<Voter> {
        self.lock()
            .players
            .iter()
            .find(|p| p.client_id == client_id)
            .map(|p| Voter {
                steam_id: p.steam_id.clone(),
                team: p.team,
            })
    }

    fn team_of(&self, steam_id: &SteamId) -> Option<Team> {
        self.lock()
            .players
            .iter()
            .find(|p| &p.steam_id == steam_id)
            .map(|p| p.team)
    }

    fn team_roster(&self, team: Team) -> Vec<SteamId> {
        self.lock()
            .players
            .iter()
            .filter(|p| p.team == team)
            .map(|p| p.steam_id.clone())
            .collect()
    }
}

impl Game for FakeHost {
    fn match_state(&self) -> Option<MatchState> {
        self.lock().match_state
    }

    fn end_match(&self) {
        let mut state = self.lock();
        state.end_match_calls += 1;
        if let Some(match_state) = state.match_state.as_mut() {
            match_state.phase = GamePhase::GameOver;
        }
    }
}

impl Chat for FakeHost {
    fn send_to_all(&self, message: &str) {
        self.lock().broadcasts.push(message.to_string());
    }

    fn send_to_one(&self, message: &str, client_id: ClientId) {
        self.lock().direct.push((client_id, message.to_string()));
    }
}
