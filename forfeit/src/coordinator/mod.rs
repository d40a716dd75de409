pub mod error;

use self::error::CommandError;
use crate::clock::{Clock, SystemClock};
use crate::command::ChatCommand;
use crate::configuration::VoteConfiguration;
use crate::event::ChatCommandEvent;
use crate::host::Host;
use crate::text;
use crate::votes::VoteSet;
use forfeit_common::types::{ClientId, Team};

/// What a chat command led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Not a command handled here.
    Ignored,
    Help,
    NoActiveMatch,
    NotOnTeam,
    DeficitTooSmall { deficit: i64 },
    AlreadyVoted,
    InProgress { count: usize, needed: usize },
    Forfeited { team: Team },
}

/// Tracks forfeit votes and ends the match once a losing team agrees.
///
/// Holds no timer. Votes expire lazily: every forfeit attempt first prunes
/// votes that are too old or whose voter left the team.
pub struct Coordinator<H, C = SystemClock> {
    conf: VoteConfiguration,
    host: H,
    clock: C,
    votes: VoteSet,
}

impl<H> Coordinator<H, SystemClock>
where
    H: Host,
{
    pub fn new(host: H) -> Self {
        Self::with_clock(host, SystemClock)
    }
}

impl<H, C> Coordinator<H, C>
where
    H: Host,
    C: Clock,
{
    pub fn with_clock(host: H, clock: C) -> Self {
        Self {
            conf: VoteConfiguration::default(),
            host,
            clock,
            votes: VoteSet::default(),
        }
    }

    pub fn conf(mut self, conf: VoteConfiguration) -> Self {
        self.conf = conf;
        self
    }

    pub fn votes(&self) -> &VoteSet {
        &self.votes
    }

    pub fn handle_chat_command(
        &mut self,
        event: &ChatCommandEvent,
    ) -> Result<CommandOutcome, CommandError> {
        let client_id = event.client_id;
        match ChatCommand::parse(&event.command) {
            ChatCommand::Help => {
                self.reply(text::HELP, client_id);
                return Ok(CommandOutcome::Help);
            }
            ChatCommand::Other => return Ok(CommandOutcome::Ignored),
            ChatCommand::Forfeit => {}
        }

        let state = self
            .host
            .match_state()
            .ok_or(CommandError::MatchUnavailable)?;
        if !state.phase.is_active() {
            tracing::debug!(
                client_id = client_id.get(),
                phase = %state.phase,
                "refused forfeit vote because there is no match"
            );
            self.reply(text::NO_MATCH, client_id);
            self.votes.clear();
            return Ok(CommandOutcome::NoActiveMatch);
        }

        let voter = self
            .host
            .resolve_voter(client_id)
            .ok_or(CommandError::PlayerNotFound(client_id))?;
        let team = voter.team;
        let deficit = match state.goal_deficit(team) {
            Some(deficit) => deficit,
            None => {
                tracing::debug!(
                    client_id = client_id.get(),
                    "refused forfeit vote because the player is not on a team"
                );
                self.reply(text::NOT_ON_TEAM, client_id);
                return Ok(CommandOutcome::NotOnTeam);
            }
        };

        if deficit < i64::from(self.conf.min_goal_deficit) {
            tracing::debug!(
                client_id = client_id.get(),
                deficit,
                min_goal_deficit = self.conf.min_goal_deficit,
                "refused forfeit vote because the goal deficit is too small"
            );
            self.reply(&text::deficit_too_small(self.conf.min_goal_deficit), client_id);
            return Ok(CommandOutcome::DeficitTooSmall { deficit });
        }

        let now = self.clock.now();
        let host = &self.host;
        let dropped = self
            .votes
            .reconcile(now, self.conf.timeout(), |v| host.team_of(v) == Some(team));
        if dropped > 0 {
            tracing::trace!(dropped, "dropped stale forfeit votes");
        }

        let added = self.votes.record(voter.steam_id, now);
        let count = self.votes.len();
        let needed = self.host.team_roster(team).len().saturating_sub(1);

        if count >= needed {
            tracing::info!(team = %team, count, needed, "forfeit vote passed");
            self.broadcast(&text::forfeited(team));
            self.votes.clear();
            self.host.end_match();
            Ok(CommandOutcome::Forfeited { team })
        } else if added {
            tracing::debug!(team = %team, count, needed, "forfeit vote in progress");
            self.broadcast(&text::in_progress(count, needed));
            Ok(CommandOutcome::InProgress { count, needed })
        } else {
            tracing::debug!(
                client_id = client_id.get(),
                "refused forfeit vote because the player already voted recently"
            );
            self.reply(text::ALREADY_VOTED, client_id);
            Ok(CommandOutcome::AlreadyVoted)
        }
    }

    /// Cancels a pending vote once the score gap closes below the threshold.
    /// Returns whether a vote was cancelled.
    pub fn handle_goal_scored(&mut self) -> Result<bool, CommandError> {
        if self.votes.is_empty() {
            return Ok(false);
        }

        let state = self
            .host
            .match_state()
            .ok_or(CommandError::MatchUnavailable)?;
        if state.goal_difference() >= self.conf.min_goal_deficit {
            return Ok(false);
        }

        tracing::debug!(
            goal_difference = state.goal_difference(),
            votes = self.votes.len(),
            "cancelled forfeit vote because the goal difference fell below the threshold"
        );
        self.broadcast(text::CANCELLED);
        self.votes.clear();
        Ok(true)
    }

    fn reply(&self, message: &str, client_id: ClientId) {
        self.host.send_to_one(&text::prefixed(message), client_id);
    }

    fn broadcast(&self, message: &str) {
        self.host.send_to_all(&text::prefixed(message));
    }
}
