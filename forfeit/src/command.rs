/// Chat commands the coordinator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    Help,
    Forfeit,
    Other,
}

impl ChatCommand {
    pub const HELP: &'static str = "/help";
    pub const FORFEIT: &'static str = "/forfeit";
    pub const FORFEIT_SHORT: &'static str = "/ff";

    /// Classifies a raw command, ignoring case and surrounding whitespace.
    pub fn parse(command: &str) -> Self {
        let command = command.trim().to_lowercase();
        match command.as_str() {
            Self::HELP => ChatCommand::Help,
            Self::FORFEIT | Self::FORFEIT_SHORT => ChatCommand::Forfeit,
            _ => ChatCommand::Other,
        }
    }
}
