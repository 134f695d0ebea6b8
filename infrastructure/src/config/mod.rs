//! Configuration file loading for reflct
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./reflct.toml` or `./.reflct.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/reflct/config.toml`
//! 4. Environment: `REFLCT_<SECTION>__<KEY>`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_KEY_ENV, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
