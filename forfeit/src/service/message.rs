use crate::coordinator::error::CommandError;
use crate::coordinator::CommandOutcome;
use crate::event::ChatCommandEvent;
use tokio::sync::oneshot;

pub enum Message {
    ChatCommand {
        event: ChatCommandEvent,
        tx: oneshot::Sender<Result<CommandOutcome, CommandError>>,
    },

    GoalScored {
        tx: oneshot::Sender<Result<bool, CommandError>>,
    },
}
