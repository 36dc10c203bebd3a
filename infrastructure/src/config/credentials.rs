//! Backend credential loading

use std::fmt;
use thiserror::Error;

/// Configuration errors that stop the program before any work starts
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not set in environment or .env")]
    MissingCredential(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// An API key read from the environment.
///
/// `Debug` never prints the key itself.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Read the key stored in variable `var`, as returned by `lookup`
    /// (usually `std::env::var`).
    ///
    /// A variable that is unset or blank counts as missing.
    pub fn from_lookup(
        var: &str,
        lookup: impl FnOnce(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        match lookup(var) {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(ConfigError::MissingCredential(var.to_string())),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
