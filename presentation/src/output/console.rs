//! Console output formatter for the roleplay chat

use crate::output::panel::{self, PanelLine};
use colored::{Color, Colorize};
use persona_domain::Disambiguation;
use persona_domain::util::wrap_text;

/// Formats status lines and panels for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title line printed on start
    pub fn banner() -> String {
        format!("\n{}", "Gemini Character Roleplay Chatbot".green().bold())
    }

    /// Usage hint printed under the banner
    pub fn intro_hint() -> String {
        format!(
            "{}\n",
            "Type the name of a person (e.g., 'Albert Einstein') or character (e.g., 'Sherlock Holmes')."
                .italic()
        )
    }

    /// Candidate list for an ambiguous name
    pub fn ambiguous(disambiguation: &Disambiguation) -> String {
        let mut output = format!(
            "\n{}\n",
            "Ambiguous name. Did you mean one of these?".yellow().bold()
        );
        if disambiguation.candidates().is_empty() {
            output.push_str(&format!(
                "{}\n",
                "   (the disambiguation page lists no options; try a different name)"
                    .dimmed()
            ));
        }
        for candidate in disambiguation.candidates() {
            output.push_str(&format!(" - {}\n", candidate.cyan()));
        }
        if disambiguation.omitted() > 0 {
            output.push_str(&format!(
                "{}\n",
                format!("   ... and {} more", disambiguation.omitted()).dimmed()
            ));
        }
        output
    }

    /// A failure that ends the run
    pub fn error(message: &str) -> String {
        format!("{}", format!("x {}", message).red().bold())
    }

    /// Printed whenever the run ends before a conversation starts
    pub fn exiting() -> String {
        format!("{}", "Exiting...".red().bold())
    }

    /// Panel announcing who the user is talking to
    pub fn chatting_with(title: &str) -> String {
        let plain = format!("You are now chatting with {}. Type 'exit' to quit.", title);
        let styled = format!(
            "You are now chatting with {}. Type 'exit' to quit.",
            title.magenta().bold()
        );
        panel::render(&[PanelLine::styled(plain, styled)], Color::Green)
    }

    /// Panel with a persona reply, wrapped to `width` columns
    pub fn reply(title: &str, reply: &str, width: usize) -> String {
        let mut lines = vec![PanelLine::styled(
            format!("{}:", title),
            format!("{}:", title.magenta().bold()),
        )];
        lines.extend(wrap_text(reply, width).lines().map(PanelLine::plain));
        panel::render(&lines, Color::Blue)
    }

    /// Printed when the user leaves
    pub fn farewell() -> String {
        format!("\n{}", "Goodbye!".green().bold())
    }
}
