//! Run Conversation use case.
//!
//! The interactive loop: read a line, leave on an exit keyword, otherwise
//! send it to the persona session and show the reply.
//!
//! ```text
//! AwaitingInput ──line──▶ SendingMessage ──ok──▶ DisplayingReply ──▶ AwaitingInput
//!       │                        │
//!       └─exit / closed─▶ Terminated ◀─send error─┘
//! ```
//!
//! Exactly one request is in flight at a time and every reply is shown
//! before the next line is read.

use crate::ports::conversation::ConversationPresenter;
use crate::ports::llm_gateway::LlmSession;
use crate::ports::user_input::UserInputPort;
use persona_domain::ChatInput;
use persona_domain::util::truncate_str;
use tracing::{debug, info, warn};

/// Why a conversation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationEnd {
    /// The user typed an exit keyword
    UserExit,
    /// Input was closed (Ctrl-D / end of stream)
    InputClosed,
    /// The backend failed to answer; carries the error message
    SendFailed(String),
}

/// Result of a finished conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationOutcome {
    pub end: ConversationEnd,
    /// Number of replies displayed
    pub turns: usize,
}

/// Prompt shown before each user line unless overridden
pub const DEFAULT_PROMPT: &str = "You: ";

/// Use case for running the chat loop against an open session.
#[derive(Debug, Clone)]
pub struct RunConversationUseCase {
    prompt: String,
}

impl Default for RunConversationUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl RunConversationUseCase {
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Set the prompt shown before each user line
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Run until the user leaves or a send fails.
    ///
    /// `persona` is the title replies are attributed to.
    pub async fn execute(
        &self,
        session: &dyn LlmSession,
        persona: &str,
        input: &mut dyn UserInputPort,
        presenter: &dyn ConversationPresenter,
    ) -> ConversationOutcome {
        let mut turns = 0;

        let end = loop {
            let Some(line) = input.read_line(&self.prompt) else {
                presenter.show_farewell();
                break ConversationEnd::InputClosed;
            };

            let message = match ChatInput::parse(&line) {
                ChatInput::Exit => {
                    presenter.show_farewell();
                    break ConversationEnd::UserExit;
                }
                ChatInput::Empty => continue,
                ChatInput::Message(message) => message,
            };

            debug!("Sending turn {}: {}", turns + 1, truncate_str(&message, 80));

            presenter.on_send_start();
            let result = session.send(&message).await;
            presenter.on_send_complete();

            match result {
                Ok(reply) => {
                    turns += 1;
                    presenter.show_reply(persona, &reply);
                }
                Err(e) => {
                    warn!("Send failed after {} turns: {}", turns, e);
                    presenter.show_send_error(&e);
                    break ConversationEnd::SendFailed(e.to_string());
                }
            }
        };

        info!("Conversation with {} ended ({:?}, {} turns)", persona, end, turns);
        ConversationOutcome { end, turns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation::NoConversationPresenter;
    use crate::ports::llm_gateway::GatewayError;
    use async_trait::async_trait;
    use persona_domain::Model;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Session that answers from a script and records what it was sent.
    struct ScriptedSession {
        model: Model,
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        sent: Mutex<Vec<String>>,
    }

    impl ScriptedSession {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                model: Model::default(),
                replies: Mutex::new(replies.into()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmSession for ScriptedSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.sent.lock().unwrap().push(content.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more replies".to_string())))
        }
    }

    struct QueuedInput(VecDeque<String>, Vec<String>);

    impl QueuedInput {
        fn new(lines: &[&str]) -> Self {
            Self(lines.iter().map(|l| l.to_string()).collect(), Vec::new())
        }
    }

    impl UserInputPort for QueuedInput {
        fn read_line(&mut self, prompt: &str) -> Option<String> {
            self.1.push(prompt.to_string());
            self.0.pop_front()
        }
    }

    /// Presenter that records every event in order.
    #[derive(Default)]
    struct RecordingPresenter {
        events: RefCell<Vec<String>>,
    }

    impl RecordingPresenter {
        fn events(&self) -> Vec<String> {
            self.events.borrow().clone()
        }
    }

    impl ConversationPresenter for RecordingPresenter {
        fn on_send_start(&self) {
            self.events.borrow_mut().push("start".to_string());
        }

        fn on_send_complete(&self) {
            self.events.borrow_mut().push("complete".to_string());
        }

        fn show_reply(&self, persona: &str, reply: &str) {
            self.events
                .borrow_mut()
                .push(format!("reply {}: {}", persona, reply));
        }

        fn show_farewell(&self) {
            self.events.borrow_mut().push("farewell".to_string());
        }

        fn show_send_error(&self, error: &GatewayError) {
            self.events.borrow_mut().push(format!("error {}", error));
        }
    }

    #[tokio::test]
    async fn test_exit_keywords_end_without_sending() {
        for keyword in ["exit", "EXIT", "  quit  "] {
            let session = ScriptedSession::new(vec![]);
            let mut input = QueuedInput::new(&[keyword, "never read"]);
            let presenter = RecordingPresenter::default();

            let outcome = RunConversationUseCase::new()
                .execute(&session, "Albert Einstein", &mut input, &presenter)
                .await;

            assert_eq!(outcome.end, ConversationEnd::UserExit);
            assert_eq!(outcome.turns, 0);
            assert!(session.sent().is_empty());
            assert_eq!(presenter.events(), vec!["farewell"]);
            assert_eq!(input.0.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_each_message_sent_once_and_answered_in_order() {
        let session = ScriptedSession::new(vec![
            Ok("Relativity is about frames of reference.".to_string()),
            Ok("I played the violin.".to_string()),
        ]);
        let mut input = QueuedInput::new(&[
            "  What is your theory of relativity? ",
            "",
            "Did you have hobbies?",
            "exit",
        ]);
        let presenter = RecordingPresenter::default();

        let outcome = RunConversationUseCase::new()
            .execute(&session, "Albert Einstein", &mut input, &presenter)
            .await;

        assert_eq!(outcome.end, ConversationEnd::UserExit);
        assert_eq!(outcome.turns, 2);
        assert_eq!(
            session.sent(),
            vec!["What is your theory of relativity?", "Did you have hobbies?"]
        );
        assert_eq!(
            presenter.events(),
            vec![
                "start",
                "complete",
                "reply Albert Einstein: Relativity is about frames of reference.",
                "start",
                "complete",
                "reply Albert Einstein: I played the violin.",
                "farewell",
            ]
        );
    }

    #[tokio::test]
    async fn test_send_failure_ends_loop() {
        let session = ScriptedSession::new(vec![
            Ok("Hello.".to_string()),
            Err(GatewayError::QuotaExceeded("429".to_string())),
        ]);
        let mut input = QueuedInput::new(&["hi", "tell me more", "still there?"]);
        let presenter = RecordingPresenter::default();

        let outcome = RunConversationUseCase::new()
            .execute(&session, "Ada Lovelace", &mut input, &presenter)
            .await;

        assert_eq!(
            outcome.end,
            ConversationEnd::SendFailed("Quota exceeded: 429".to_string())
        );
        assert_eq!(outcome.turns, 1);
        assert_eq!(session.sent(), vec!["hi", "tell me more"]);
        // Earlier output is untouched; the error is appended last
        assert_eq!(
            presenter.events(),
            vec![
                "start",
                "complete",
                "reply Ada Lovelace: Hello.",
                "start",
                "complete",
                "error Quota exceeded: 429",
            ]
        );
        // The line after the failure is never read
        assert_eq!(input.0.len(), 1);
    }

    #[tokio::test]
    async fn test_closed_input_ends_gracefully() {
        let session = ScriptedSession::new(vec![Ok("Greetings.".to_string())]);
        let mut input = QueuedInput::new(&["hello"]);
        let presenter = RecordingPresenter::default();

        let outcome = RunConversationUseCase::new()
            .execute(&session, "Cleopatra", &mut input, &presenter)
            .await;

        assert_eq!(outcome.end, ConversationEnd::InputClosed);
        assert_eq!(outcome.turns, 1);
        assert_eq!(presenter.events().last().unwrap(), "farewell");
    }

    #[tokio::test]
    async fn test_prompt_shown_for_every_read() {
        let session = ScriptedSession::new(vec![]);
        let mut input = QueuedInput::new(&["", "quit"]);

        RunConversationUseCase::new()
            .with_prompt("> ")
            .execute(&session, "Cleopatra", &mut input, &NoConversationPresenter)
            .await;

        assert_eq!(input.1, vec!["> ", "> "]);
    }
}
