//! Capabilities the coordinator borrows from the game server.
//!
//! The coordinator never reaches for global game state. Everything it reads
//! or causes goes through these traits, so a host adapter decides how they
//! map onto the engine.

use forfeit_common::types::{ClientId, MatchState, SteamId, Team};

/// The player behind a chat client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voter {
    pub steam_id: SteamId,
    pub team: Team,
}

pub trait Players {
    fn resolve_voter(&self, client_id: ClientId) -> Option<Voter>;

    /// Current team of a player, `None` if the player has left the server.
    fn team_of(&self, steam_id: &SteamId) -> Option<Team>;

    fn team_roster(&self, team: Team) -> Vec<SteamId>;
}

pub trait Game {
    fn match_state(&self) -> Option<MatchState>;

    fn end_match(&self);
}

pub trait Chat {
    fn send_to_all(&self, message: &str);

    fn send_to_one(&self, message: &str, client_id: ClientId);
}

pub trait Host: Players + Game + Chat {}

impl<T> Host for T where T: Players + Game + Chat {}
