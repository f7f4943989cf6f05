//! # Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! `pawsbot chat` plays the part of the storefront chat widget in a
//! terminal. It opens a `ChatSession`, prints the greeting, then reads one
//! message per line from stdin until the customer says goodbye or stdin
//! closes.
//!
//! ```bash
//! pawsbot chat
//! pawsbot chat --no-delay --rules ./spring-sale.toml
//! ```
//!
use super::{index_source, load_rule_book, SelectorArgs};
use anyhow::Context;
use clap::Parser;
use pawsbot::conversation::{ChatSession, DelayPolicy};
use pawsbot::core::config::Config;
use pawsbot::core::error::Result;
use pawsbot::selector::ResponseSelector;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Words that end the chat, compared case-insensitively.
const EXIT_WORDS: [&str; 3] = ["bye", "exit", "quit"];

#[derive(Parser, Debug)]
pub struct ChatArgs {
    #[command(flatten)]
    pub selector: SelectorArgs,

    /// Show replies immediately instead of simulating typing.
    #[arg(long)]
    pub no_delay: bool,
}

pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    let book = load_rule_book(config, args.selector.rules.as_deref())?;
    let selector = ResponseSelector::with_source(book, index_source(args.selector.seed));
    let delay = if args.no_delay {
        DelayPolicy::none()
    } else {
        config.chat.delay
    };
    let mut session = ChatSession::new(selector, delay).with_greeting(&config.chat.greeting);
    let bot = config.chat.bot_name.as_str();

    if let Some(greeting) = session.log().last() {
        println!("{}: {}", bot, greeting.text);
    }
    println!("(Type 'bye' to leave the chat.)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("You: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        else {
            println!();
            break;
        };

        let input = line.trim();
        if is_exit_word(input) {
            break;
        }
        if input.is_empty() {
            continue;
        }

        if !session.delay().is_none() {
            println!("{} is typing...", bot);
        }
        if let Some(reply) = session.submit(input).await {
            println!("{}: {}", bot, reply.text);
        }
    }

    println!("{}: Goodbye! Come back soon. 🐾", bot);
    info!("Chat ended after {} messages", session.log().len());
    Ok(())
}

fn is_exit_word(input: &str) -> bool {
    EXIT_WORDS.iter().any(|word| input.eq_ignore_ascii_case(word))
}
