//! Initialize Persona use case.
//!
//! Builds the persona instruction from a character summary and opens a chat
//! session seeded with it.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use persona_domain::{Model, PersonaPromptTemplate};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while opening a persona session.
#[derive(Error, Debug)]
pub enum InitializePersonaError {
    #[error("Character summary cannot be empty")]
    EmptySummary,

    #[error("Failed to start chat: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Input for the [`InitializePersonaUseCase`].
#[derive(Debug, Clone)]
pub struct InitializePersonaInput {
    /// Summary of the resolved character
    pub summary: String,
    /// Model the session should run on
    pub model: Model,
}

impl InitializePersonaInput {
    pub fn new(summary: impl Into<String>, model: Model) -> Self {
        Self {
            summary: summary.into(),
            model,
        }
    }
}

/// Use case for opening a role-play session.
pub struct InitializePersonaUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl InitializePersonaUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        input: InitializePersonaInput,
    ) -> Result<Box<dyn LlmSession>, InitializePersonaError> {
        if input.summary.trim().is_empty() {
            return Err(InitializePersonaError::EmptySummary);
        }

        let instruction = PersonaPromptTemplate::persona_instruction(&input.summary);
        let session = self.gateway.start_session(&input.model, &instruction).await?;

        info!("Persona session started on {}", session.model());
        Ok(session)
    }
}
