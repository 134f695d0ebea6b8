//! Slash commands understood by the chat REPL

/// A parsed `/command` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse `line` as a command; `None` when it is an ordinary message.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        let name = line.split_whitespace().next().unwrap_or(line);
        Some(match name {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/history" => ReplCommand::History,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        })
    }

    pub fn help_text() -> &'static str {
        "Commands:
  /help, /h, /?      - Show this help
  /history           - Show the whole conversation
  /quit, /exit, /q   - Exit chat"
    }
}
