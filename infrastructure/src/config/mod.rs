//! Configuration loading for persona-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./persona-chat.toml` or `./.persona-chat.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/persona-chat/config.toml`
//! 4. Default values
//!
//! The backend credential never lives in these files; it is read from the
//! environment (see [`ApiKey`]).

mod credentials;
mod file_config;
mod loader;

pub use credentials::{ApiKey, ConfigError};
pub use file_config::{
    ConfigIssue, FileConfig, FileGeminiConfig, FileLookupConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
