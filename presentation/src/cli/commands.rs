//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for reflct
#[derive(Parser, Debug)]
#[command(name = "reflct")]
#[command(author, version, about = "A supportive virtual-therapist chat in your terminal")]
#[command(long_about = r#"
reflct is a terminal chat with a supportive virtual therapist backed by Gemini.

The conversation is saved after every message and restored on the next run.
Replies may include a motivational quote, a breathing exercise when you
mention feeling anxious or panicked, or a gratitude prompt when you feel
empty or unmotivated.

The API key is read from $GEMINI_API_KEY unless configured otherwise.

Configuration files are loaded from (in priority order):
1. --config <path>                 Explicit config file
2. ./reflct.toml                   Project-level config
3. ~/.config/reflct/config.toml    Global config
4. REFLCT_<SECTION>__<KEY>         Environment variables

Example:
  reflct                            Start the interactive chat
  reflct "I had a rough day"        Send one message and print the reply
  reflct --history                  Print the saved conversation
"#)]
pub struct Cli {
    /// Send a single message and exit instead of starting the chat
    pub message: Option<String>,

    /// Print the saved conversation and exit
    #[arg(long, conflicts_with = "message")]
    pub history: bool,

    /// Model identifier to use (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the typing indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Keep the conversation in memory only
    #[arg(long)]
    pub ephemeral: bool,
}
