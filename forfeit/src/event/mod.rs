pub mod error;

use self::error::EventError;
use forfeit_common::types::ClientId;
use std::collections::HashMap;

pub const FIELD_COMMAND: &str = "command";
pub const FIELD_CLIENT_ID: &str = "clientId";

/// A chat command issued by a connected client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCommandEvent {
    pub command: String,
    pub client_id: ClientId,
}

impl ChatCommandEvent {
    pub fn new<S: Into<String>, I: Into<ClientId>>(command: S, client_id: I) -> Self {
        Self {
            command: command.into(),
            client_id: client_id.into(),
        }
    }

    /// Builds an event from the host's loosely typed chat payload.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, EventError> {
        let command = fields
            .get(FIELD_COMMAND)
            .ok_or(EventError::MissingField(FIELD_COMMAND))?;
        let client_id = fields
            .get(FIELD_CLIENT_ID)
            .ok_or(EventError::MissingField(FIELD_CLIENT_ID))?;
        let client_id = client_id
            .trim()
            .parse::<u64>()
            .map_err(|_| EventError::InvalidClientId(client_id.clone()))?;

        Ok(Self::new(command.as_str(), client_id))
    }
}
