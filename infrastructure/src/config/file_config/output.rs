//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Column width replies are wrapped to
    pub wrap_width: usize,
    /// Enable colored terminal output
    pub color: bool,
}

impl FileOutputConfig {
    pub const DEFAULT_WRAP_WIDTH: usize = 80;
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            wrap_width: Self::DEFAULT_WRAP_WIDTH,
            color: true,
        }
    }
}
