//! Application layer for persona-chat
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation::{ConversationPresenter, NoConversationPresenter},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    reference_lookup::{LookupError, ReferenceLookupPort},
    user_input::UserInputPort,
};
pub use use_cases::initialize_persona::{
    InitializePersonaError, InitializePersonaInput, InitializePersonaUseCase,
};
pub use use_cases::resolve_character::ResolveCharacterUseCase;
pub use use_cases::run_conversation::{
    ConversationEnd, ConversationOutcome, DEFAULT_PROMPT, RunConversationUseCase,
};
