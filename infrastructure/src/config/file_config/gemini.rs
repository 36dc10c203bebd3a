//! Gemini configuration from TOML (`[gemini]` section)

use persona_domain::Model;
use serde::{Deserialize, Serialize};

/// Raw Gemini backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model the persona runs on (default: "gemini-1.5-flash")
    pub model: String,
    /// Environment variable holding the API key (default: "GEMINI_API_KEY")
    pub api_key_env: String,
    /// Base URL of the Generative Language API
    pub base_url: String,
    /// Request timeout in seconds; unset uses the HTTP client's default
    pub timeout_secs: Option<u64>,
}

impl FileGeminiConfig {
    pub fn parse_model(&self) -> Model {
        match self.model.parse::<Model>() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: None,
        }
    }
}
