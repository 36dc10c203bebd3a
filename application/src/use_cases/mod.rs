//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod initialize_persona;
pub mod resolve_character;
pub mod run_conversation;
