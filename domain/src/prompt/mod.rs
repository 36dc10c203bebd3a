//! Prompt templates
//!
//! - [`persona::PersonaPromptTemplate`]: the role-play seed instruction

pub mod persona;

pub use persona::PersonaPromptTemplate;
