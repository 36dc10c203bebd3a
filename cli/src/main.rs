//! CLI entrypoint for persona-chat
//!
//! Wires the Wikipedia and Gemini adapters into the roleplay REPL.

use anyhow::Result;
use clap::Parser;
use persona_domain::Model;
use persona_infrastructure::{
    ApiKey, ConfigError, ConfigLoader, FileConfig, GeminiLlmGateway, WikipediaClient,
};
use persona_presentation::{Cli, ConsoleFormatter, PersonaRepl};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // A missing .env file is fine
    let dotenv = dotenvy::dotenv().ok();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // Credential problems end the run before the banner or any prompt
    let repl = match prepare_repl(&cli, &config, |var| std::env::var(var).ok()) {
        Ok(repl) => repl,
        Err(e) if e.is::<ConfigError>() => {
            eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e),
    };

    let outcome = repl.run().await?;
    info!("Finished: {:?}", outcome);

    Ok(ExitCode::SUCCESS)
}

/// Resolve the credential and model, then wire the adapters into a REPL.
///
/// `env` looks up environment variables. Fails with [`ConfigError`] when the
/// API key is missing.
fn prepare_repl(
    cli: &Cli,
    config: &FileConfig,
    env: impl FnOnce(&str) -> Option<String>,
) -> Result<PersonaRepl> {
    let api_key = ApiKey::from_lookup(&config.gemini.api_key_env, env)?;

    let model = match &cli.model {
        Some(name) => match name.parse::<Model>() {
            Ok(model) => model,
            Err(never) => match never {},
        },
        None => config.gemini.parse_model(),
    };
    if !model.is_known() {
        warn!("Model '{}' is not a known Gemini model; trying it anyway", model);
    }

    info!("Starting persona-chat with {}", model);

    // === Dependency Injection ===
    let lookup = Arc::new(WikipediaClient::new(
        config.lookup.api_url.clone(),
        &config.lookup.user_agent,
        config.lookup.timeout_secs.map(Duration::from_secs),
    )?);
    let gateway = Arc::new(GeminiLlmGateway::new(
        api_key,
        config.gemini.base_url.clone(),
        config.gemini.timeout_secs.map(Duration::from_secs),
    )?);

    Ok(PersonaRepl::new(lookup, gateway, model)
        .with_wrap_width(config.output.wrap_width)
        .with_chat_prompt(config.repl.prompt.clone())
        .with_progress(config.repl.show_progress && !cli.quiet))
}

/// Load, validate and sanitize the layered configuration
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(ConfigError::from)?
    };

    for issue in config.validate() {
        warn!("Config {}: {}", issue.field, issue.message);
    }

    Ok(config.sanitized())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("persona-chat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_missing_key_fails_before_repl_exists() {
        let mut asked = Vec::new();
        let result = prepare_repl(&cli(&[]), &FileConfig::default(), |var| {
            asked.push(var.to_string());
            None
        });

        let Err(err) = result else {
            panic!("expected a configuration error");
        };
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingCredential(var)) if var == "GEMINI_API_KEY"
        ));
        assert_eq!(err.to_string(), "GEMINI_API_KEY not set in environment or .env");
        assert_eq!(asked, vec!["GEMINI_API_KEY"]);
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let result = prepare_repl(&cli(&[]), &FileConfig::default(), |_| {
            Some("   ".to_string())
        });
        assert!(matches!(result, Err(e) if e.is::<ConfigError>()));
    }

    #[test]
    fn test_configured_key_variable_is_used() {
        let mut config = FileConfig::default();
        config.gemini.api_key_env = "MY_GEMINI_KEY".to_string();

        let result = prepare_repl(&cli(&["--model", "gemini-2.5-pro"]), &config, |var| {
            (var == "MY_GEMINI_KEY").then(|| "secret".to_string())
        });
        assert!(result.is_ok());
    }
}
