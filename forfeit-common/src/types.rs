use serde::{Deserialize, Serialize};
use std::error;
use std::fmt;

/// Maximum length in bytes of a player identity. The host keeps identities in
/// a 32 byte buffer that reserves 3 bytes for its length and terminator.
pub const STEAM_ID_MAX_LEN: usize = 29;

/// Connection id the host attaches to every chat event.
#[derive(Copy, Clone, Ord, Hash, PartialOrd, Eq, PartialEq, Debug, Deserialize, Serialize)]
pub struct ClientId(u64);

impl From<u64> for ClientId {
    fn from(id: u64) -> Self {
        ClientId(id)
    }
}

impl ClientId {
    pub fn new(id: u64) -> Self {
        ClientId(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SteamIdError {
    Empty,
    TooLong(usize),
}

impl fmt::Display for SteamIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SteamIdError::Empty => write!(f, "steam id is empty"),
            SteamIdError::TooLong(len) => write!(
                f,
                "steam id is {} bytes long, at most {} bytes are allowed",
                len, STEAM_ID_MAX_LEN
            ),
        }
    }
}

impl error::Error for SteamIdError {}

/// Stable identity of a player, independent of their connection.
///
/// Longer values than the host can store are refused.
#[derive(Clone, Ord, Hash, PartialOrd, Eq, PartialEq, Debug, Serialize)]
pub struct SteamId(String);

impl SteamId {
    pub fn new<S: Into<String>>(id: S) -> Result<Self, SteamIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(SteamIdError::Empty);
        }
        if id.len() > STEAM_ID_MAX_LEN {
            return Err(SteamIdError::TooLong(id.len()));
        }
        Ok(SteamId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SteamId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        SteamId::new(id).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Deserialize, Serialize)]
pub enum Team {
    None,
    Red,
    Blue,
}

impl Default for Team {
    fn default() -> Self {
        Team::None
    }
}

impl Team {
    /// Returns the team playing against this one, if this is a playing team.
    pub fn opponent(&self) -> Option<Team> {
        match self {
            Team::Red => Some(Team::Blue),
            Team::Blue => Some(Team::Red),
            Team::None => None,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Team::None => "NONE",
            Team::Red => "RED",
            Team::Blue => "BLUE",
        };
        f.write_str(s)
    }
}

#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Deserialize, Serialize)]
pub enum GamePhase {
    None,
    Warmup,
    Active,
    GameOver,
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::None
    }
}

impl GamePhase {
    /// Whether a match is currently being played.
    pub fn is_active(&self) -> bool {
        matches!(self, GamePhase::Active)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GamePhase::None => "none",
            GamePhase::Warmup => "warmup",
            GamePhase::Active => "active",
            GamePhase::GameOver => "game-over",
        };
        f.write_str(s)
    }
}

/// Read-only snapshot of the match as seen by the host.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Deserialize, Serialize)]
pub struct MatchState {
    pub phase: GamePhase,
    pub red_score: u32,
    pub blue_score: u32,
}

impl MatchState {
    pub fn new(phase: GamePhase, red_score: u32, blue_score: u32) -> Self {
        Self {
            phase,
            red_score,
            blue_score,
        }
    }

    pub fn score(&self, team: Team) -> Option<u32> {
        match team {
            Team::Red => Some(self.red_score),
            Team::Blue => Some(self.blue_score),
            Team::None => None,
        }
    }

    /// Opposing score minus the score of `team`. Negative when `team` leads.
    pub fn goal_deficit(&self, team: Team) -> Option<i64> {
        let own = self.score(team)?;
        let opposing = self.score(team.opponent()?)?;
        Some(i64::from(opposing) - i64::from(own))
    }

    /// Absolute score gap between the two teams.
    pub fn goal_difference(&self) -> u32 {
        if self.red_score > self.blue_score {
            self.red_score - self.blue_score
        } else {
            self.blue_score - self.red_score
        }
    }
}
