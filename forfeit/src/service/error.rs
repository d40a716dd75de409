use crate::coordinator::error::CommandError;
use crate::event::error::EventError;
use std::error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    Terminated,
    Crashed,
    Event(EventError),
    Command(CommandError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ServiceError::*;
        match self {
            Terminated => write!(f, "the coordinator has been terminated"),
            Crashed => write!(
                f,
                "the coordinator has been crashed during event processing"
            ),
            Event(e) => {
                write!(f, "failed to read the event: ")?;
                e.fmt(f)
            }
            Command(e) => e.fmt(f),
        }
    }
}

impl error::Error for ServiceError {}

impl From<EventError> for ServiceError {
    fn from(e: EventError) -> Self {
        ServiceError::Event(e)
    }
}

impl From<CommandError> for ServiceError {
    fn from(e: CommandError) -> Self {
        ServiceError::Command(e)
    }
}
