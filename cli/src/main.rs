//! CLI entrypoint for reflct
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use reflct_application::{
    CompletionClient, ConversationLogger, KeyValueStorage, SendMessageOutput, SendMessageUseCase,
    SessionStore,
};
use reflct_domain::ModelId;
use reflct_infrastructure::storage::FileKeyValueStorage;
use reflct_infrastructure::{
    ConfigLoader, FileConfig, GeminiGateway, JsonlConversationLogger, MemoryKeyValueStorage,
    StdRandomSource,
};
use reflct_presentation::{ChatRepl, Cli, ConsoleFormatter};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_logging(cli.verbose, config.logging.log_dir_path().as_deref());

    info!("Starting reflct");

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let store = open_store(&config, cli.ephemeral)?;

    // Reading the transcript needs no provider
    if cli.history {
        println!("{}", render_history(&store));
        return Ok(());
    }

    let model = resolve_model(cli.model.as_deref(), &config)?;

    let Some(api_key) = config.provider.resolve_api_key() else {
        bail!(
            "No API key found. Set ${} or provider.api_key in the config file.",
            config.provider.api_key_env
        );
    };

    let mut gateway = GeminiGateway::new(api_key)?;
    if let Some(base_url) = &config.provider.base_url {
        gateway = gateway.with_base_url(base_url);
    }

    let client = CompletionClient::new(Arc::new(gateway), model);
    let mut use_case =
        SendMessageUseCase::new(client, store, Box::new(StdRandomSource::from_entropy()));

    if let Some(path) = config.logging.conversation_log_path() {
        if let Some(logger) = JsonlConversationLogger::open(&path) {
            info!(path = %logger.path().display(), "Conversation log enabled");
            let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
            use_case = use_case.with_conversation_logger(logger);
        }
    }

    let mut repl = ChatRepl::new(Arc::new(use_case))
        .with_progress(config.repl.show_progress && !cli.quiet)
        .with_history_file(config.repl.history_path());

    if let Some(message) = cli.message {
        send_once(&mut repl, &message).await?;
        return Ok(());
    }

    repl.run().await?;
    Ok(())
}

/// Session store over file storage, or memory when `ephemeral`.
fn open_store(config: &FileConfig, ephemeral: bool) -> Result<SessionStore> {
    let storage: Arc<dyn KeyValueStorage> = if ephemeral {
        info!("Ephemeral session, nothing will be saved");
        Arc::new(MemoryKeyValueStorage::new())
    } else {
        let dir = config
            .storage
            .resolve_dir()
            .or_else(FileKeyValueStorage::default_dir)
            .context("Could not determine a data directory; set storage.dir")?;
        info!(dir = %dir.display(), "Using file storage");
        Arc::new(FileKeyValueStorage::new(dir))
    };
    Ok(SessionStore::with_key(storage, config.storage.effective_key()))
}

fn render_history(store: &SessionStore) -> String {
    ConsoleFormatter::format_transcript(&store.load())
}

/// Submit one message; a rejected submission is an error for the exit code.
async fn send_once(repl: &mut ChatRepl, message: &str) -> Result<SendMessageOutput> {
    repl.submit(message).await.context("Message was not sent")
}

/// `-m` wins over the config file; a blank config model falls back to the default.
fn resolve_model(flag: Option<&str>, config: &FileConfig) -> Result<ModelId> {
    if let Some(name) = flag {
        return ModelId::new(name).context("Invalid --model");
    }
    Ok(config.provider.parse_model().unwrap_or_default())
}

/// Console logging by verbosity, plus a daily file when `log_dir` is set.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter).with(console);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "reflct.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflct_domain::{FixedRandom, GREETING};

    fn config_in(dir: &Path) -> FileConfig {
        let mut config = FileConfig::default();
        config.storage.dir = Some(dir.display().to_string());
        config.provider.api_key_env = "REFLCT_TEST_UNSET_API_KEY".to_string();
        config
    }

    #[test]
    fn test_history_reads_stored_session_without_api_key() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("therapistChatHistory.json"),
            r#"[{"role":"assistant","content":"Hello there."},{"role":"user","content":"I slept badly"}]"#,
        )
        .unwrap();
        let config = config_in(dir.path());
        assert!(config.provider.resolve_api_key().is_none());

        let output = render_history(&open_store(&config, false).unwrap());
        assert!(output.contains("Hello there."));
        assert!(output.contains("I slept badly"));
    }

    #[test]
    fn test_history_of_ephemeral_session_is_greeting() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let output = render_history(&open_store(&config_in(dir.path()), true).unwrap());
        assert!(output.contains(GREETING));
    }

    #[tokio::test]
    async fn test_blank_one_shot_message_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&config_in(dir.path()), true).unwrap();
        let gateway = GeminiGateway::new("test-key").unwrap();
        let client = CompletionClient::new(Arc::new(gateway), ModelId::default());
        let use_case = SendMessageUseCase::new(client, store, Box::new(FixedRandom::never()));
        let mut repl = ChatRepl::new(Arc::new(use_case)).with_progress(false);

        assert!(send_once(&mut repl, "   ").await.is_err());
        assert_eq!(repl.session().len(), 1);
    }
}
