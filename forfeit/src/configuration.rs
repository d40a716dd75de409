use serde::{Deserialize, Serialize};
use std::time::Duration;

const VOTE_MIN_GOAL_DEFICIT: u32 = 3;
const VOTE_TIMEOUT_SECS: u64 = 60;
const SERVICE_MAILBOX_CAPACITY: usize = 100;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Configuration {
    #[serde(default)]
    pub vote: VoteConfiguration,
    #[serde(default)]
    pub service: ServiceConfiguration,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VoteConfiguration {
    /// Goals a team must trail by before its players may vote.
    #[serde(default = "default_min_goal_deficit")]
    pub min_goal_deficit: u32,
    /// Seconds after which a vote no longer counts.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl VoteConfiguration {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for VoteConfiguration {
    fn default() -> Self {
        Self {
            min_goal_deficit: VOTE_MIN_GOAL_DEFICIT,
            timeout_secs: VOTE_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServiceConfiguration {
    #[serde(default = "default_mailbox_capacity")]
    pub mailbox_capacity: usize,
}

impl Default for ServiceConfiguration {
    fn default() -> Self {
        Self {
            mailbox_capacity: SERVICE_MAILBOX_CAPACITY,
        }
    }
}

fn default_min_goal_deficit() -> u32 {
    VOTE_MIN_GOAL_DEFICIT
}

fn default_timeout_secs() -> u64 {
    VOTE_TIMEOUT_SECS
}

fn default_mailbox_capacity() -> usize {
    SERVICE_MAILBOX_CAPACITY
}
