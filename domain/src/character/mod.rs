//! Character domain.
//!
//! - [`entities::Character`]: a resolved encyclopedia entry (title + summary)
//! - [`entities::CharacterName`]: the free-text name the user asked for
//! - [`lookup::LookupOutcome`]: result of resolving a name
//! - [`lookup::Disambiguation`]: candidate titles for an ambiguous name

pub mod entities;
pub mod lookup;
