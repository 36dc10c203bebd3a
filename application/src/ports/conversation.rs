//! Conversation presenter port
//!
//! Defines how the chat loop reports what happens in a conversation.
//! Implementations live in the presentation layer.

use crate::ports::llm_gateway::GatewayError;

/// Callbacks for displaying a running conversation
pub trait ConversationPresenter {
    /// Called right before a message is sent to the backend
    fn on_send_start(&self) {}

    /// Called once the backend has answered (successfully or not)
    fn on_send_complete(&self) {}

    /// Display the persona's reply
    fn show_reply(&self, persona: &str, reply: &str);

    /// Display the farewell when the user leaves
    fn show_farewell(&self);

    /// Display a failed send; the conversation ends afterwards
    fn show_send_error(&self, error: &GatewayError);
}

/// Presenter that shows nothing
pub struct NoConversationPresenter;

impl ConversationPresenter for NoConversationPresenter {
    fn show_reply(&self, _persona: &str, _reply: &str) {}
    fn show_farewell(&self) {}
    fn show_send_error(&self, _error: &GatewayError) {}
}
