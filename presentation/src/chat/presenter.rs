//! Console implementation of the conversation presenter

use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::Spinner;
use persona_application::{ConversationPresenter, GatewayError};

/// Prints replies as panels and shows a spinner while a reply is pending.
pub struct ConsolePresenter<'a> {
    wrap_width: usize,
    spinner: &'a Spinner,
}

impl<'a> ConsolePresenter<'a> {
    pub fn new(wrap_width: usize, spinner: &'a Spinner) -> Self {
        Self {
            wrap_width,
            spinner,
        }
    }
}

impl ConversationPresenter for ConsolePresenter<'_> {
    fn on_send_start(&self) {
        self.spinner.start("Waiting for reply...");
    }

    fn on_send_complete(&self) {
        self.spinner.stop();
    }

    fn show_reply(&self, persona: &str, reply: &str) {
        println!(
            "{}",
            ConsoleFormatter::reply(persona, reply, self.wrap_width)
        );
    }

    fn show_farewell(&self) {
        println!("{}", ConsoleFormatter::farewell());
    }

    fn show_send_error(&self, error: &GatewayError) {
        println!(
            "{}",
            ConsoleFormatter::error(&format!("Gemini API Error: {}", error))
        );
    }
}
