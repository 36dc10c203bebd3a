//! Lookup configuration from TOML (`[lookup]` section)

use serde::{Deserialize, Serialize};

/// Raw encyclopedia lookup configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLookupConfig {
    /// MediaWiki Action API endpoint
    pub api_url: String,
    /// User-Agent sent with every request (Wikimedia asks for a descriptive one)
    pub user_agent: String,
    /// Request timeout in seconds; unset uses the HTTP client's default
    pub timeout_secs: Option<u64>,
}

impl Default for FileLookupConfig {
    fn default() -> Self {
        Self {
            api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            user_agent: concat!(
                "persona-chat/",
                env!("CARGO_PKG_VERSION"),
                " (interactive roleplay client)"
            )
            .to_string(),
            timeout_secs: None,
        }
    }
}
