//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Character name cannot be empty")]
    EmptyName,

    #[error("Character title cannot be empty")]
    EmptyTitle,

    #[error("Character summary cannot be empty")]
    EmptySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::EmptyName.to_string(),
            "Character name cannot be empty"
        );
        assert_eq!(
            DomainError::EmptySummary.to_string(),
            "Character summary cannot be empty"
        );
    }
}
