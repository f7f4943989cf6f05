//! # Rules Command
//!
//! File: cli/src/commands/rules.rs
//!
//! ## Overview
//!
//! Inspects the rule table in effect (built-in, configured, or `--rules`).
//!
//! ```bash
//! # List rules in priority order
//! pawsbot rules
//!
//! # Validate a rule table before deploying it
//! pawsbot rules --rules ./spring-sale.toml --check
//!
//! # Which rule would answer this message?
//! pawsbot rules --match "any discounts on raincoats?"
//! ```
//!
use super::{load_rule_book, rule_table_path};
use clap::Parser;
use pawsbot::core::config::Config;
use pawsbot::core::error::Result;
use pawsbot::selector::{ResponseSelector, RuleBook};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Rule table file to inspect instead of the configured or built-in one.
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Only validate the table and print a summary.
    #[arg(long, conflicts_with = "matching")]
    pub check: bool,

    /// Show which rule a message would match.
    #[arg(long = "match", value_name = "MESSAGE")]
    pub matching: Option<String>,
}

pub async fn handle_rules(args: RulesArgs, config: &Config) -> Result<()> {
    let source = match rule_table_path(config, args.rules.as_deref()) {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };
    let selector = ResponseSelector::new(load_rule_book(config, args.rules.as_deref())?);
    let book = selector.rule_book();

    if args.check {
        println!("Rule table OK ({}): {}", source, summary(book));
        return Ok(());
    }

    if let Some(message) = args.matching {
        match selector.classify(&message) {
            Some(rule) => println!("Matched rule '{}' [{}]", rule.name(), rule.category()),
            None => println!("No rule matched; a fallback reply would be used"),
        }
        return Ok(());
    }

    println!("Rule table ({}): {}", source, summary(book));
    for line in describe(book) {
        println!("{}", line);
    }
    Ok(())
}

fn summary(book: &RuleBook) -> String {
    format!(
        "{} rules, {} fallback replies",
        book.rules().len(),
        book.fallback().len()
    )
}

fn describe(book: &RuleBook) -> Vec<String> {
    book.rules()
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            format!(
                "{:>3}. {} [{}]: {}",
                i + 1,
                rule.name(),
                rule.category(),
                rule.triggers().join(", ")
            )
        })
        .collect()
}
