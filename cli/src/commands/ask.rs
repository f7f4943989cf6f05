//! # Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! `pawsbot ask "<message>"` prints the reply for one message and exits.
//! With `--json` the reply is printed as `{"text": ..., "category": ...}`.
//! Omitting the message is the same as asking with an empty one.
//!
use super::{index_source, load_rule_book, SelectorArgs};
use anyhow::Context;
use clap::Parser;
use pawsbot::core::config::Config;
use pawsbot::core::error::Result;
use pawsbot::selector::{Reply, ResponseSelector};
use tracing::debug;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The customer's message.
    pub message: Option<String>,

    #[command(flatten)]
    pub selector: SelectorArgs,

    /// Print the reply as JSON.
    #[arg(long)]
    pub json: bool,
}

pub async fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let book = load_rule_book(config, args.selector.rules.as_deref())?;
    let selector = ResponseSelector::with_source(book, index_source(args.selector.seed));

    let message = args.message.as_deref().map(str::trim);
    let reply = selector.select_optional(message);
    debug!("Reply category: {}", reply.category);

    println!("{}", render(&reply, args.json)?);
    Ok(())
}

fn render(reply: &Reply, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(reply).context("Failed to serialize reply")
    } else {
        Ok(reply.text.clone())
    }
}
