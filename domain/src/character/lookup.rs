//! Lookup outcomes

use super::entities::Character;
use serde::{Deserialize, Serialize};

/// Candidate titles for a name that matched several entries (Value Object)
///
/// Candidates keep the order the lookup service reported them in and are
/// capped at [`Disambiguation::MAX_CANDIDATES`]. `total` remembers how many
/// options there were before the cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disambiguation {
    candidates: Vec<String>,
    total: usize,
}

impl Disambiguation {
    /// Maximum number of candidates kept
    pub const MAX_CANDIDATES: usize = 5;

    /// Build from the full option list, keeping the first five.
    pub fn from_options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut candidates = Vec::with_capacity(Self::MAX_CANDIDATES);
        let mut total = 0;
        for option in options {
            total += 1;
            if candidates.len() < Self::MAX_CANDIDATES {
                candidates.push(option.into());
            }
        }
        Self { candidates, total }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Number of options reported before truncation
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of options that were dropped by the cap
    pub fn omitted(&self) -> usize {
        self.total - self.candidates.len()
    }
}

/// Result of resolving a character name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A unique entry was found
    Found(Character),
    /// Several entries match; the user has to be more specific
    Ambiguous(Disambiguation),
}

impl LookupOutcome {
    /// Consume and return the character, if one was found
    pub fn into_character(self) -> Option<Character> {
        match self {
            LookupOutcome::Found(character) => Some(character),
            LookupOutcome::Ambiguous(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_capped_in_order() {
        let options = [
            "Mercury (planet)",
            "Mercury (element)",
            "Mercury (mythology)",
            "Mercury (Marvel Comics)",
            "Freddie Mercury",
            "Mercury Records",
            "Mercury program",
        ];
        let d = Disambiguation::from_options(options);
        assert_eq!(d.candidates().len(), Disambiguation::MAX_CANDIDATES);
        assert_eq!(d.candidates()[0], "Mercury (planet)");
        assert_eq!(d.candidates()[4], "Freddie Mercury");
        assert_eq!(d.total(), 7);
        assert_eq!(d.omitted(), 2);
    }

    #[test]
    fn test_short_list_kept_whole() {
        let d = Disambiguation::from_options(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(d.candidates(), ["A", "B"]);
        assert_eq!(d.omitted(), 0);
    }

    #[test]
    fn test_outcome_into_character() {
        let character = Character::new("Albert Einstein", "A physicist.").unwrap();
        let found = LookupOutcome::Found(character.clone());
        assert_eq!(found.into_character(), Some(character));

        let ambiguous = LookupOutcome::Ambiguous(Disambiguation::from_options(["A", "B"]));
        assert_eq!(ambiguous.into_character(), None);
    }
}
