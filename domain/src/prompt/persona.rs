//! Persona instruction template

/// Builds the instruction that turns a chat session into a role-play.
pub struct PersonaPromptTemplate;

impl PersonaPromptTemplate {
    const PREAMBLE: &'static str =
        "You are roleplaying as the following historical or fictional figure:";

    const DIRECTIVE: &'static str =
        "Respond in first person, stay in character, and do not break character.";

    /// Persona instruction for the given summary.
    ///
    /// The summary is embedded byte-for-byte between the preamble and the
    /// in-character directive.
    pub fn persona_instruction(summary: &str) -> String {
        format!("{}\n\n{}\n\n{}", Self::PREAMBLE, summary, Self::DIRECTIVE)
    }
}
