//! # Pawsbot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the pawsbot CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration once and handing it to the command handlers
//! - Routing execution to the appropriate command handler
//!
//! ## Examples
//!
//! ```bash
//! # Chat with the assistant
//! pawsbot chat
//!
//! # One-off question with debug logging
//! pawsbot -vv ask "Do you ship to Berlin?"
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "pawsbot",
    about = "🐾 Pawsbot: storefront chat assistant for pet fashion",
    long_about = "Answers customer questions about sizing, shipping, colors, returns and offers\n\
                  using an ordered table of topic rules, with friendly fallbacks for everything else.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user and project files.
    #[arg(long, value_name = "FILE", global = true, env = "PAWSBOT_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive chat session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Print the reply to a single message.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List or check the rule table, or show which rule a message matches.
    #[command(alias = "r")]
    Rules(commands::rules::RulesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match pawsbot::core::config::load_config(cli.config.as_deref()) {
        Ok(config) => match cli.command {
            Commands::Chat(args) => commands::chat::handle_chat(args, &config).await,
            Commands::Ask(args) => commands::ask::handle_ask(args, &config).await,
            Commands::Rules(args) => commands::rules::handle_rules(args, &config).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
