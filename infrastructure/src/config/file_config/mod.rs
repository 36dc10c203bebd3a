//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod lookup;
mod output;
mod repl;

pub use gemini::FileGeminiConfig;
pub use lookup::FileLookupConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// A problem found while validating the configuration.
///
/// Issues are warnings: the offending value falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending key (e.g. `gemini.model`)
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generative backend settings
    pub gemini: FileGeminiConfig,
    /// Encyclopedia lookup settings
    pub lookup: FileLookupConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.gemini.model.trim().is_empty() {
            issues.push(ConfigIssue {
                field: "gemini.model".to_string(),
                message: format!(
                    "gemini.model is empty, falling back to '{}'",
                    FileGeminiConfig::default().model
                ),
            });
        }

        if self.gemini.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue {
                field: "gemini.api_key_env".to_string(),
                message: "gemini.api_key_env is empty, falling back to 'GEMINI_API_KEY'"
                    .to_string(),
            });
        }

        if self.output.wrap_width == 0 {
            issues.push(ConfigIssue {
                field: "output.wrap_width".to_string(),
                message: format!(
                    "output.wrap_width must be positive, falling back to {}",
                    FileOutputConfig::DEFAULT_WRAP_WIDTH
                ),
            });
        }

        for (field, value) in [
            ("gemini.timeout_secs", self.gemini.timeout_secs),
            ("lookup.timeout_secs", self.lookup.timeout_secs),
        ] {
            if value == Some(0) {
                issues.push(ConfigIssue {
                    field: field.to_string(),
                    message: format!("{} is 0, no timeout will be applied", field),
                });
            }
        }

        issues
    }

    /// Replace invalid values with their defaults.
    ///
    /// Call after [`validate`](Self::validate) has reported the issues.
    pub fn sanitized(mut self) -> Self {
        if self.gemini.model.trim().is_empty() {
            self.gemini.model = FileGeminiConfig::default().model;
        }
        if self.gemini.api_key_env.trim().is_empty() {
            self.gemini.api_key_env = FileGeminiConfig::default().api_key_env;
        }
        if self.output.wrap_width == 0 {
            self.output.wrap_width = FileOutputConfig::DEFAULT_WRAP_WIDTH;
        }
        if self.gemini.timeout_secs == Some(0) {
            self.gemini.timeout_secs = None;
        }
        if self.lookup.timeout_secs == Some(0) {
            self.lookup.timeout_secs = None;
        }
        self
    }
}
