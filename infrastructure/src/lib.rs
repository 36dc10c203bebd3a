//! Infrastructure layer for persona-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod gemini;
pub mod wikipedia;

// Re-export commonly used types
pub use config::{
    ApiKey, ConfigError, ConfigIssue, ConfigLoader, FileConfig, FileGeminiConfig,
    FileLookupConfig, FileOutputConfig, FileReplConfig,
};
pub use gemini::{GeminiLlmGateway, GeminiSession};
pub use wikipedia::WikipediaClient;
