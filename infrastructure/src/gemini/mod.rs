//! Google Gemini adapter
//!
//! Implements the `LlmGateway` / `LlmSession` ports over the Generative
//! Language REST API. The API is stateless, so each session keeps the full
//! turn history locally and resends it with every request.

mod error;
mod gateway;
mod session;
mod types;

pub use gateway::GeminiLlmGateway;
pub use session::GeminiSession;
