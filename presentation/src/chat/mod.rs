//! Interactive roleplay chat
//!
//! Provides the readline-based flow: ask for a name, resolve it, open the
//! persona session and run the conversation.

mod input;
mod presenter;
mod repl;

pub use input::EditorInput;
pub use presenter::ConsolePresenter;
pub use repl::{ChatRunOutcome, DEFAULT_WRAP_WIDTH, NAME_PROMPT, PersonaRepl};
