//! Chat loop configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Prompt printed before each chat line
pub const DEFAULT_CHAT_PROMPT: &str = "You: ";

/// Raw chat loop configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while waiting for lookups and replies
    pub show_progress: bool,
    /// Prompt printed before each chat line
    pub prompt: String,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            prompt: DEFAULT_CHAT_PROMPT.to_string(),
        }
    }
}
