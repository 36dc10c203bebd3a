//! Domain layer for persona-chat
//!
//! This crate contains the core entities and value objects of a roleplay
//! chat run. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Character
//!
//! A [`Character`] is the figure the model will play: the canonical
//! encyclopedia title plus its summary. A lookup either finds one
//! ([`LookupOutcome::Found`]) or reports that the name is ambiguous
//! ([`LookupOutcome::Ambiguous`]).
//!
//! ## Persona instruction
//!
//! The summary is embedded verbatim into a fixed instruction
//! ([`PersonaPromptTemplate`]) that seeds the chat session as its first turn.
//!
//! ## Chat input
//!
//! Every line the user types is classified as [`ChatInput`]: an exit
//! keyword, a blank line, or a message for the persona.

pub mod character;
pub mod chat;
pub mod core;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use character::{
    entities::{Character, CharacterName},
    lookup::{Disambiguation, LookupOutcome},
};
pub use chat::input::ChatInput;
pub use core::{error::DomainError, model::Model};
pub use prompt::PersonaPromptTemplate;
pub use session::entities::{Message, Role};
