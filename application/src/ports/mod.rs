//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod conversation;
pub mod llm_gateway;
pub mod reference_lookup;
pub mod user_input;
