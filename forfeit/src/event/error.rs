use std::error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    MissingField(&'static str),
    InvalidClientId(String),
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventError::MissingField(key) => write!(f, "event has no field: {}", key),
            EventError::InvalidClientId(value) => write!(f, "invalid client id: {}", value),
        }
    }
}

impl error::Error for EventError {}
