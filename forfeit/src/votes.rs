use forfeit_common::types::SteamId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Forfeit votes currently held, one per player.
#[derive(Debug, Default)]
pub struct VoteSet {
    votes: HashMap<SteamId, Instant>,
}

impl VoteSet {
    /// Drops every vote that is at least `timeout` old at `now` or whose voter
    /// is no longer accepted by `is_member`. Returns how many were dropped.
    pub fn reconcile<F>(&mut self, now: Instant, timeout: Duration, mut is_member: F) -> usize
    where
        F: FnMut(&SteamId) -> bool,
    {
        let before = self.votes.len();
        self.votes.retain(|voter, cast_at| {
            now.saturating_duration_since(*cast_at) < timeout && is_member(voter)
        });
        before - self.votes.len()
    }

    /// Records a vote cast at `now`, replacing any earlier vote by the same
    /// player. Returns `true` if the player had no vote yet.
    pub fn record(&mut self, voter: SteamId, now: Instant) -> bool {
        self.votes.insert(voter, now).is_none()
    }

    pub fn contains(&self, voter: &SteamId) -> bool {
        self.votes.contains_key(voter)
    }

    pub fn cast_at(&self, voter: &SteamId) -> Option<Instant> {
        self.votes.get(voter).copied()
    }

    pub fn voters(&self) -> impl Iterator<Item = &SteamId> {
        self.votes.keys()
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    pub fn clear(&mut self) {
        self.votes.clear();
    }
}
