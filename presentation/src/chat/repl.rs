//! Persona chat REPL
//!
//! Drives one run of the program: banner, character name, lookup, session
//! start, then the conversation loop.

use super::input::EditorInput;
use super::presenter::ConsolePresenter;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::Spinner;
use persona_application::{
    ConversationOutcome, InitializePersonaInput, InitializePersonaUseCase, LlmGateway,
    ReferenceLookupPort, ResolveCharacterUseCase, RunConversationUseCase, UserInputPort,
};
use persona_domain::{LookupOutcome, Model};
use std::sync::Arc;
use tracing::{debug, info};

/// Prompt used when asking for the character
pub const NAME_PROMPT: &str = "Enter character name: ";

/// Reply wrap width when none is configured
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// How a run of the REPL finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatRunOutcome {
    /// Input closed before a name was entered
    NoName,
    /// The name matched a disambiguation page
    Ambiguous,
    /// The lookup failed (not found, network, service error)
    LookupFailed(String),
    /// The chat session could not be opened
    InitFailed(String),
    /// A conversation took place
    Conversation(ConversationOutcome),
}

/// Interactive roleplay REPL
pub struct PersonaRepl {
    resolve: ResolveCharacterUseCase,
    initialize: InitializePersonaUseCase,
    conversation: RunConversationUseCase,
    model: Model,
    wrap_width: usize,
    show_progress: bool,
}

impl PersonaRepl {
    pub fn new(
        lookup: Arc<dyn ReferenceLookupPort>,
        gateway: Arc<dyn LlmGateway>,
        model: Model,
    ) -> Self {
        Self {
            resolve: ResolveCharacterUseCase::new(lookup),
            initialize: InitializePersonaUseCase::new(gateway),
            conversation: RunConversationUseCase::new(),
            model,
            wrap_width: DEFAULT_WRAP_WIDTH,
            show_progress: true,
        }
    }

    /// Set the column width replies are wrapped to
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }

    /// Set the prompt shown before each chat line
    pub fn with_chat_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.conversation = RunConversationUseCase::new().with_prompt(prompt);
        self
    }

    /// Enable or disable the spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run against the terminal
    pub async fn run(&self) -> rustyline::Result<ChatRunOutcome> {
        let mut input = EditorInput::new()?;
        Ok(self.run_session(&mut input).await)
    }

    /// Run against any line source
    pub async fn run_session(&self, input: &mut dyn UserInputPort) -> ChatRunOutcome {
        println!("{}", ConsoleFormatter::banner());
        println!("{}", ConsoleFormatter::intro_hint());

        let Some(name) = Self::read_name(input) else {
            println!("{}", ConsoleFormatter::exiting());
            return ChatRunOutcome::NoName;
        };

        let spinner = Spinner::new(self.show_progress);

        spinner.start(format!("Looking up {} on Wikipedia...", name));
        let resolved = self.resolve.execute(&name).await;
        spinner.stop();

        let character = match resolved {
            Ok(LookupOutcome::Found(character)) => character,
            Ok(LookupOutcome::Ambiguous(disambiguation)) => {
                println!("{}", ConsoleFormatter::ambiguous(&disambiguation));
                println!("{}", ConsoleFormatter::exiting());
                return ChatRunOutcome::Ambiguous;
            }
            Err(e) => {
                println!(
                    "{}",
                    ConsoleFormatter::error(&format!("Error fetching character data: {}", e))
                );
                println!("{}", ConsoleFormatter::exiting());
                return ChatRunOutcome::LookupFailed(e.to_string());
            }
        };

        let (title, summary) = character.into_parts();
        debug!("Starting persona session for {} on {}", title, self.model);

        spinner.start("Starting chat...");
        let started = self
            .initialize
            .execute(InitializePersonaInput::new(summary, self.model.clone()))
            .await;
        spinner.stop();

        let session = match started {
            Ok(session) => session,
            Err(e) => {
                println!("{}", ConsoleFormatter::error(&e.to_string()));
                println!("{}", ConsoleFormatter::exiting());
                return ChatRunOutcome::InitFailed(e.to_string());
            }
        };

        println!("{}", ConsoleFormatter::chatting_with(&title));

        let presenter = ConsolePresenter::new(self.wrap_width, &spinner);
        let outcome = self
            .conversation
            .execute(session.as_ref(), &title, input, &presenter)
            .await;

        info!("Run finished after {} replies", outcome.turns);
        ChatRunOutcome::Conversation(outcome)
    }

    /// Ask until a non-blank name is given or input closes
    fn read_name(input: &mut dyn UserInputPort) -> Option<String> {
        loop {
            let line = input.read_line(NAME_PROMPT)?;
            let name = line.trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use persona_application::{ConversationEnd, GatewayError, LlmSession, LookupError};
    use persona_domain::{Character, CharacterName, Disambiguation};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct FixedLookup;

    #[async_trait]
    impl ReferenceLookupPort for FixedLookup {
        async fn lookup(&self, name: &CharacterName) -> Result<LookupOutcome, LookupError> {
            match name.as_str() {
                "Albert Einstein" => Ok(LookupOutcome::Found(
                    Character::new(
                        "Albert Einstein",
                        "Albert Einstein was a German-born theoretical physicist.",
                    )
                    .unwrap(),
                )),
                "Mercury" => Ok(LookupOutcome::Ambiguous(Disambiguation::from_options([
                    "Mercury (planet)",
                    "Mercury (element)",
                    "Mercury (mythology)",
                ]))),
                other => Err(LookupError::NotFound(other.to_string())),
            }
        }
    }

    struct CannedSession {
        model: Model,
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmSession for CannedSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.sent.lock().unwrap().push(content.to_string());
            Ok("Ah, relativity! Time and space are relative.".to_string())
        }
    }

    #[derive(Default)]
    struct CannedGateway {
        seeds: Mutex<Vec<String>>,
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmGateway for CannedGateway {
        async fn start_session(
            &self,
            model: &Model,
            seed: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            self.seeds.lock().unwrap().push(seed.to_string());
            Ok(Box::new(CannedSession {
                model: model.clone(),
                sent: self.sent.clone(),
            }))
        }
    }

    struct QueuedInput {
        lines: VecDeque<String>,
        prompts: Vec<String>,
    }

    impl QueuedInput {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl UserInputPort for QueuedInput {
        fn read_line(&mut self, prompt: &str) -> Option<String> {
            self.prompts.push(prompt.to_string());
            self.lines.pop_front()
        }
    }

    fn repl(gateway: Arc<CannedGateway>) -> PersonaRepl {
        PersonaRepl::new(Arc::new(FixedLookup), gateway, Model::default()).with_progress(false)
    }

    #[tokio::test]
    async fn test_found_character_chats_until_exit() {
        let gateway = Arc::new(CannedGateway::default());
        let mut input = QueuedInput::new(&[
            "Albert Einstein",
            "What is your theory of relativity?",
            "exit",
        ]);

        let outcome = repl(gateway.clone()).run_session(&mut input).await;

        assert_eq!(
            outcome,
            ChatRunOutcome::Conversation(ConversationOutcome {
                end: ConversationEnd::UserExit,
                turns: 1,
            })
        );
        let seeds = gateway.seeds.lock().unwrap();
        assert_eq!(seeds.len(), 1);
        assert!(seeds[0].contains("German-born theoretical physicist"));
        assert_eq!(
            *gateway.sent.lock().unwrap(),
            vec!["What is your theory of relativity?"]
        );
        assert_eq!(input.prompts, vec![NAME_PROMPT, "You: ", "You: "]);
    }

    #[tokio::test]
    async fn test_ambiguous_name_never_opens_session() {
        let gateway = Arc::new(CannedGateway::default());
        let mut input = QueuedInput::new(&["Mercury", "hello"]);

        let outcome = repl(gateway.clone()).run_session(&mut input).await;

        assert_eq!(outcome, ChatRunOutcome::Ambiguous);
        assert!(gateway.seeds.lock().unwrap().is_empty());
        assert_eq!(input.lines.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_name_reports_lookup_failure() {
        let gateway = Arc::new(CannedGateway::default());
        let mut input = QueuedInput::new(&["Zzyzx Qwerty"]);

        let outcome = repl(gateway.clone()).run_session(&mut input).await;

        assert_eq!(
            outcome,
            ChatRunOutcome::LookupFailed("No page found for \"Zzyzx Qwerty\"".to_string())
        );
        assert!(gateway.seeds.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_names_reprompt_and_closed_input_exits() {
        let gateway = Arc::new(CannedGateway::default());
        let mut input = QueuedInput::new(&["", "   "]);

        let outcome = repl(gateway).run_session(&mut input).await;

        assert_eq!(outcome, ChatRunOutcome::NoName);
        assert_eq!(input.prompts, vec![NAME_PROMPT; 3]);
    }

    #[tokio::test]
    async fn test_custom_chat_prompt() {
        let gateway = Arc::new(CannedGateway::default());
        let mut input = QueuedInput::new(&["Albert Einstein", "quit"]);

        let outcome = repl(gateway)
            .with_chat_prompt("> ")
            .run_session(&mut input)
            .await;

        assert!(matches!(outcome, ChatRunOutcome::Conversation(_)));
        assert_eq!(input.prompts, vec![NAME_PROMPT, "> "]);
    }
}
