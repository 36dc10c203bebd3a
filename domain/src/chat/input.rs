//! Classification of chat input lines

/// Keywords that end the conversation (compared case-insensitively)
pub const EXIT_KEYWORDS: &[&str] = &["exit", "quit"];

/// One line of user input, classified (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    /// The user asked to leave
    Exit,
    /// Nothing but whitespace
    Empty,
    /// A message for the persona, already trimmed
    Message(String),
}

impl ChatInput {
    /// Classify a raw input line.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ChatInput::Empty;
        }
        if EXIT_KEYWORDS
            .iter()
            .any(|keyword| trimmed.eq_ignore_ascii_case(keyword))
        {
            return ChatInput::Exit;
        }
        ChatInput::Message(trimmed.to_string())
    }
}
