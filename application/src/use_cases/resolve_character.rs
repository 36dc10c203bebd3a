//! Resolve Character use case.
//!
//! Turns the name the user typed into a [`LookupOutcome`]: a unique
//! [`Character`](persona_domain::Character) or a short list of candidates.

use crate::ports::reference_lookup::{LookupError, ReferenceLookupPort};
use persona_domain::util::truncate_str;
use persona_domain::{CharacterName, LookupOutcome};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for resolving a character name.
///
/// Never retries and never picks a candidate on the user's behalf.
pub struct ResolveCharacterUseCase {
    lookup: Arc<dyn ReferenceLookupPort>,
}

impl ResolveCharacterUseCase {
    pub fn new(lookup: Arc<dyn ReferenceLookupPort>) -> Self {
        Self { lookup }
    }

    /// Resolve a raw (untrimmed) name.
    pub async fn execute(&self, raw_name: &str) -> Result<LookupOutcome, LookupError> {
        let name = CharacterName::parse(raw_name)?;
        info!("Resolving character: {}", name);

        let outcome = self.lookup.lookup(&name).await?;

        match &outcome {
            LookupOutcome::Found(character) => debug!(
                "Resolved \"{}\" to \"{}\" ({} bytes of summary): {}",
                name,
                character.title(),
                character.summary().len(),
                truncate_str(character.summary(), 80)
            ),
            LookupOutcome::Ambiguous(disambiguation) => debug!(
                "\"{}\" is ambiguous: {} options, showing {}",
                name,
                disambiguation.total(),
                disambiguation.candidates().len()
            ),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use persona_domain::{Character, Disambiguation};
    use std::sync::Mutex;

    /// Lookup that answers from a fixed table and records queries.
    struct TableLookup {
        queries: Mutex<Vec<String>>,
    }

    impl TableLookup {
        fn new() -> Self {
            Self {
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ReferenceLookupPort for TableLookup {
        async fn lookup(&self, name: &CharacterName) -> Result<LookupOutcome, LookupError> {
            self.queries.lock().unwrap().push(name.as_str().to_string());
            match name.as_str() {
                "Albert Einstein" => Ok(LookupOutcome::Found(
                    Character::new(
                        "Albert Einstein",
                        "Albert Einstein was a German-born theoretical physicist.",
                    )
                    .unwrap(),
                )),
                "Mercury" => Ok(LookupOutcome::Ambiguous(Disambiguation::from_options([
                    "Mercury (planet)",
                    "Mercury (element)",
                    "Mercury (mythology)",
                    "Mercury (Marvel Comics)",
                    "Freddie Mercury",
                    "Mercury Records",
                ]))),
                "offline" => Err(LookupError::Network("connection refused".to_string())),
                other => Err(LookupError::NotFound(other.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_unique_name_resolves_to_character() {
        let use_case = ResolveCharacterUseCase::new(Arc::new(TableLookup::new()));
        let outcome = use_case.execute("Albert Einstein").await.unwrap();

        let character = outcome.into_character().expect("character");
        assert_eq!(character.title(), "Albert Einstein");
        assert!(!character.summary().is_empty());
    }

    #[tokio::test]
    async fn test_ambiguous_name_returns_at_most_five_candidates() {
        let use_case = ResolveCharacterUseCase::new(Arc::new(TableLookup::new()));
        let outcome = use_case.execute("Mercury").await.unwrap();

        match outcome {
            LookupOutcome::Ambiguous(d) => {
                assert!(d.candidates().len() <= 5);
                assert_eq!(d.candidates()[0], "Mercury (planet)");
                assert_eq!(d.total(), 6);
            }
            LookupOutcome::Found(_) => panic!("expected ambiguity"),
        }
    }

    #[tokio::test]
    async fn test_name_is_trimmed_before_lookup() {
        let lookup = Arc::new(TableLookup::new());
        let use_case = ResolveCharacterUseCase::new(lookup.clone());
        use_case.execute("   Albert Einstein  ").await.unwrap();

        assert_eq!(*lookup.queries.lock().unwrap(), vec!["Albert Einstein"]);
    }

    #[tokio::test]
    async fn test_blank_name_never_reaches_lookup() {
        let lookup = Arc::new(TableLookup::new());
        let use_case = ResolveCharacterUseCase::new(lookup.clone());
        let err = use_case.execute("  ").await.unwrap_err();

        assert!(matches!(err, LookupError::InvalidName(_)));
        assert!(lookup.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failures_are_passed_through() {
        let use_case = ResolveCharacterUseCase::new(Arc::new(TableLookup::new()));

        let err = use_case.execute("offline").await.unwrap_err();
        assert!(matches!(err, LookupError::Network(_)));

        let err = use_case.execute("Zzyzx Qwerty").await.unwrap_err();
        assert_eq!(err.to_string(), "No page found for \"Zzyzx Qwerty\"");
    }
}
