//! Presentation layer for persona-chat
//!
//! This crate contains the CLI definition, console panels, the spinner and
//! the interactive roleplay REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRunOutcome, ConsolePresenter, EditorInput, PersonaRepl};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::Spinner;
