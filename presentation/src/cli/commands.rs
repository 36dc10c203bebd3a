//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for persona-chat
#[derive(Parser, Debug)]
#[command(name = "persona-chat")]
#[command(author, version, about = "Chat with historical and fictional figures")]
#[command(long_about = r#"
persona-chat looks a person or character up on Wikipedia and asks Gemini to
role-play them, using the article summary as the persona.

The session is fully interactive:
1. Enter a name (e.g. 'Albert Einstein' or 'Sherlock Holmes')
2. Chat line by line
3. Type 'exit' or 'quit' to leave

The Gemini API key is read from GEMINI_API_KEY (a .env file in the current
directory is loaded first).

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./persona-chat.toml   Project-level config
3. ~/.config/persona-chat/config.toml   Global config
"#)]
pub struct Cli {
    /// Gemini model to role-play with (overrides the config file)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress spinners
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
