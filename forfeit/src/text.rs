use forfeit_common::types::Team;

pub const MESSAGE_PREFIX: &str = "<color=orange><b>VoteForfeit</b></color>";
pub const HELP: &str = "commands:\n* <b>/forfeit</b> (/ff) - Vote to forfeit";
pub const NO_MATCH: &str = "You cannot vote to forfeit when there is no match.";
pub const NOT_ON_TEAM: &str = "You must be in a team to forfeit.";
pub const ALREADY_VOTED: &str = "You already recently voted to forfeit.";
pub const CANCELLED: &str = "Cancelling <b>forfeit</b> vote.";

pub fn prefixed(message: &str) -> String {
    format!("{} {}", MESSAGE_PREFIX, message)
}

pub fn deficit_too_small(min_goal_deficit: u32) -> String {
    format!(
        "You must be losing by at least {} goals to forfeit.",
        min_goal_deficit
    )
}

pub fn forfeited(team: Team) -> String {
    format!("{} has forfeited the match.", team)
}

pub fn in_progress(count: usize, needed: usize) -> String {
    format!("Vote <b>forfeit</b> in progress ({}/{}).", count, needed)
}
