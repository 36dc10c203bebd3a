//! Reference lookup port.
//!
//! Defines the interface for resolving a free-text character name against an
//! encyclopedia. Infrastructure adapters implement this (e.g. Wikipedia).

use async_trait::async_trait;
use persona_domain::{CharacterName, DomainError, LookupOutcome};
use thiserror::Error;

/// Errors that can occur during a lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The name was rejected before any request was made
    #[error("Invalid name: {0}")]
    InvalidName(#[from] DomainError),

    /// No page matches the name
    #[error("No page found for \"{0}\"")]
    NotFound(String),

    /// The service could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with an error or an unexpected payload
    #[error("Lookup service error: {0}")]
    Service(String),
}

/// Port for resolving character names to encyclopedia entries.
#[async_trait]
pub trait ReferenceLookupPort: Send + Sync {
    /// Resolve a name to a unique entry, or to the list of candidates it
    /// could refer to.
    async fn lookup(&self, name: &CharacterName) -> Result<LookupOutcome, LookupError>;
}
