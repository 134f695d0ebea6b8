//! Console output formatter for chat transcripts

use colored::Colorize;
use reflct_domain::{Message, Role, Session};

/// Formats session messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Label shown before each message.
    fn role_label(role: Role) -> String {
        match role {
            Role::User => "You".cyan().bold().to_string(),
            Role::Assistant => "Therapist".green().bold().to_string(),
        }
    }

    /// One message: label line, then the indented content.
    pub fn format_message(message: &Message) -> String {
        format!(
            "{}\n{}\n",
            Self::role_label(message.role),
            Self::indent(&message.content, "  ")
        )
    }

    /// Every message of the session, oldest first, separated by blank lines.
    pub fn format_transcript(session: &Session) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Conversation"));
        output.push('\n');
        for message in session.messages() {
            output.push('\n');
            output.push_str(&Self::format_message(message));
        }
        output.push_str(&Self::footer());
        output
    }

    /// The assistant reply printed after a submission.
    pub fn format_reply(reply: &str, fallback: bool) -> String {
        let label = if fallback {
            "Therapist".yellow().bold().to_string()
        } else {
            Self::role_label(Role::Assistant)
        };
        format!("{}\n{}\n", label, Self::indent(reply, "  "))
    }

    fn header(title: &str) -> String {
        let line = "═".repeat(50);
        format!("{}\n {}\n{}", line.dimmed(), title.bold(), line.dimmed())
    }

    fn footer() -> String {
        format!("{}\n", "─".repeat(50).dimmed())
    }

    /// Prefix each non-empty line with `prefix`; blank lines stay blank.
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", prefix, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
