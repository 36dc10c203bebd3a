//! Character entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The name a user typed when asked who to talk to (Value Object)
///
/// Always stored trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a name from raw user input, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CharacterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved encyclopedia entry the model will role-play (Entity)
///
/// Immutable once created. Both the canonical title and the summary are
/// guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    title: String,
    summary: String,
}

impl Character {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let summary = summary.into();
        if title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if summary.trim().is_empty() {
            return Err(DomainError::EmptySummary);
        }
        Ok(Self { title, summary })
    }

    /// Canonical title of the entry (e.g. "Albert Einstein")
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Plain-text summary of the entry
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Split into `(title, summary)`
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.summary)
    }
}
