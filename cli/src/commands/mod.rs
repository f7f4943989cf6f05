//! # Pawsbot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `pawsbot` CLI and the
//! helpers they share for turning configuration and flags into a selector.
//!
//! ## Commands
//!
//! - `chat`: Interactive chat session over stdin/stdout
//! - `ask`: One-shot reply for a single message
//! - `rules`: List or check a rule table, or match a message against it
//!
use clap::Args;
use pawsbot::core::config::{check_rule_table_path, Config};
use pawsbot::core::error::Result;
use pawsbot::selector::{IndexSource, RuleBook, SeededSource, ThreadRngSource};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Interactive chat REPL.
pub mod chat;
/// Single message, single reply.
pub mod ask;
/// Rule table inspection.
pub mod rules;

/// Flags shared by every command that builds a selector.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectorArgs {
    /// Rule table file to use instead of the configured or built-in one.
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Seed for fallback selection, making replies reproducible.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

/// The rule table path in effect: `--rules` first, then `[rules] file`.
pub fn rule_table_path(config: &Config, cli_override: Option<&Path>) -> Option<PathBuf> {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.rules.file.as_ref().map(PathBuf::from))
}

/// Loads the rule book in effect, falling back to the built-in catalog.
pub fn load_rule_book(config: &Config, cli_override: Option<&Path>) -> Result<RuleBook> {
    match rule_table_path(config, cli_override) {
        Some(path) => {
            check_rule_table_path(&path)?;
            RuleBook::load(&path)
        }
        None => {
            debug!("Using built-in rule table");
            Ok(RuleBook::builtin())
        }
    }
}

/// Seeded source when `--seed` was given, thread RNG otherwise.
pub fn index_source(seed: Option<u64>) -> Box<dyn IndexSource> {
    match seed {
        Some(seed) => {
            debug!("Using seeded fallback selection (seed {})", seed);
            Box::new(SeededSource::new(seed))
        }
        None => Box::new(ThreadRngSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawsbot::core::config::RulesConfig;

    #[test]
    fn cli_rules_path_wins_over_config() {
        let config = Config {
            rules: RulesConfig {
                file: Some("/from/config.toml".into()),
            },
            ..Default::default()
        };
        assert_eq!(
            rule_table_path(&config, Some(Path::new("/from/cli.toml"))),
            Some(PathBuf::from("/from/cli.toml"))
        );
        assert_eq!(
            rule_table_path(&config, None),
            Some(PathBuf::from("/from/config.toml"))
        );
        assert_eq!(rule_table_path(&Config::default(), None), None);
    }

    #[test]
    fn builtin_used_without_paths() {
        let book = load_rule_book(&Config::default(), None).unwrap();
        assert_eq!(book, RuleBook::builtin());
    }

    #[test]
    fn cli_rules_replace_a_missing_configured_table() {
        let dir = tempfile::tempdir().unwrap();
        let rules = dir.path().join("rules.toml");
        std::fs::write(&rules, "fallback = [\"Woof?\"]\n").unwrap();
        let config = Config {
            rules: RulesConfig {
                file: Some("/gone/rules.toml".into()),
            },
            ..Default::default()
        };

        let book = load_rule_book(&config, Some(&rules)).unwrap();
        assert_eq!(book.fallback(), ["Woof?".to_string()]);

        let err = load_rule_book(&config, None).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn seeded_sources_repeat() {
        let a = index_source(Some(9));
        let b = index_source(Some(9));
        let picks_a: Vec<usize> = (0..10).map(|_| a.pick(5)).collect();
        let picks_b: Vec<usize> = (0..10).map(|_| b.pick(5)).collect();
        assert_eq!(picks_a, picks_b);
    }
}
