pub mod clock;
pub mod command;
pub mod configuration;
pub mod coordinator;
pub mod event;
pub mod host;
pub mod service;
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;
pub mod text;
pub mod votes;


pub use coordinator::{CommandOutcome, Coordinator};
pub use forfeit_common::types;
pub use service::{CoordinatorHandle, CoordinatorService};
