//! LLM Gateway port
//!
//! Defines the interface for opening and driving chat sessions with a
//! generative backend.

use async_trait::async_trait;
use persona_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for opening chat sessions
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Open a new session whose history starts with `seed` as a user turn.
    ///
    /// The backend is not asked to answer the seed turn. Credential and model
    /// problems should be reported here rather than on the first `send`.
    async fn start_session(
        &self,
        model: &Model,
        seed: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active chat session
///
/// The session owns its turn history; callers only append user turns and
/// read the reply.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a user turn and wait for the model's reply
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
