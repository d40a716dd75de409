use forfeit_common::types::ClientId;
use std::error;
use std::fmt;

/// Host data the coordinator needed but could not get. The call is dropped
/// without touching any votes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    PlayerNotFound(ClientId),
    MatchUnavailable,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::PlayerNotFound(id) => write!(f, "no player for client {}", id),
            CommandError::MatchUnavailable => write!(f, "match state is not available"),
        }
    }
}

impl error::Error for CommandError {}
