//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use crate::output::console::ConsoleFormatter;
use crate::progress::TypingIndicator;
use reflct_application::{SendMessageError, SendMessageOutput, SendMessageUseCase};
use reflct_domain::Session;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

const PROMPT: &str = "you> ";

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: Arc<SendMessageUseCase>,
    session: Session,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a REPL over the stored session.
    pub fn new(use_case: Arc<SendMessageUseCase>) -> Self {
        let session = use_case.load_session();
        Self {
            use_case,
            session,
            show_progress: true,
            history_path: dirs::data_dir().map(|p| p.join("reflct").join("history.txt")),
        }
    }

    /// Set whether to show the typing indicator
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the line-editor history file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_path = path;
        }
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Print the whole conversation.
    pub fn print_history(&self) {
        println!("{}", ConsoleFormatter::format_transcript(&self.session));
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    println!();
                    self.submit(line).await;
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Take care!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Send one message and print the reply.
    ///
    /// Returns `None` when the submission was not accepted.
    pub async fn submit(&mut self, text: &str) -> Option<SendMessageOutput> {
        let indicator = TypingIndicator::start(self.show_progress);
        let result = self.use_case.execute(&mut self.session, text).await;
        indicator.finish();

        match result {
            Ok(output) => {
                debug!(
                    enrichments = output.enrichments.len(),
                    fallback = output.fallback,
                    "Reply received"
                );
                println!(
                    "{}",
                    ConsoleFormatter::format_reply(&output.reply, output.fallback)
                );
                Some(output)
            }
            Err(SendMessageError::Busy) => {
                eprintln!("Please wait for the current reply.");
                None
            }
            Err(e) => {
                eprintln!("{}", e);
                None
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          reflct - Virtual Therapist         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.use_case.model());
        println!("{}", ReplCommand::help_text());
        println!();

        for message in self.session.messages() {
            println!("{}", ConsoleFormatter::format_message(message));
        }
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Take care!");
                true
            }
            ReplCommand::Help => {
                println!();
                println!("{}", ReplCommand::help_text());
                println!();
                false
            }
            ReplCommand::History => {
                self.print_history();
                false
            }
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
                false
            }
        }
    }
}
