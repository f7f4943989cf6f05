//! # Topic Rules and Rule Books
//!
//! File: cli/src/selector/rules.rs
//!
//! ## Overview
//!
//! A `RuleBook` is the immutable configuration the selector runs against: an
//! ordered list of `TopicRule`s followed by a fallback pool. Rule books are
//! validated when they are built, so a selector holding one can never reach
//! an undefined state at reply time.
//!
//! Validation rules:
//! - the fallback pool holds at least one non-blank reply
//! - every rule has a non-blank name, unique within the book
//! - every rule has at least one trigger and no blank triggers
//! - every response template is non-blank
//!
//! ## Rule table files
//!
//! Rule books can be loaded from TOML:
//!
//! ```toml
//! fallback = ["Sorry, could you rephrase that?"]
//!
//! [[rules]]
//! name = "size"
//! category = "informational"
//! triggers = ["size", "fit"]
//! response = "Our size guide lives on every product page."
//! ```
//!
use super::Category;
use crate::core::error::{PawsbotError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::{fs, path::Path};
use tracing::{debug, info};

/// One entry of the rule table.
///
/// Triggers are stored lower-cased so matching only has to normalize the
/// utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRule {
    name: String,
    category: Category,
    triggers: Vec<String>,
    response: String,
}

impl TopicRule {
    /// Builds a rule, lower-casing its triggers and rejecting blank fields.
    pub fn new<N, I, T, R>(
        name: N,
        category: Category,
        triggers: I,
        response: R,
    ) -> std::result::Result<Self, PawsbotError>
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
        R: Into<String>,
    {
        let name = name.into();
        let invalid = |reason: &str| PawsbotError::InvalidRule {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.trim().is_empty() {
            return Err(invalid("rule name is empty"));
        }

        let mut lowered = Vec::new();
        for trigger in triggers {
            let trigger = trigger.as_ref();
            if trigger.trim().is_empty() {
                return Err(invalid("blank trigger would match every message"));
            }
            lowered.push(trigger.to_lowercase());
        }
        if lowered.is_empty() {
            return Err(invalid("at least one trigger is required"));
        }

        let response = response.into();
        if response.trim().is_empty() {
            return Err(invalid("response template is empty"));
        }

        Ok(Self {
            name,
            category,
            triggers: lowered,
            response,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// True if any trigger occurs anywhere in `normalized`.
    ///
    /// `normalized` must already be lower-cased. Matching is plain substring
    /// containment, so "fit" matches inside "outfit".
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| normalized.contains(trigger.as_str()))
    }
}

/// Ordered rules plus the fallback pool. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBook {
    rules: Vec<TopicRule>,
    fallback: Vec<String>,
}

impl RuleBook {
    /// Builds a rule book. Fails fast on an empty fallback pool, a blank
    /// fallback reply, or a duplicated rule name.
    pub fn new(
        rules: Vec<TopicRule>,
        fallback: Vec<String>,
    ) -> std::result::Result<Self, PawsbotError> {
        if fallback.is_empty() {
            return Err(PawsbotError::EmptyFallbackPool);
        }
        if let Some(index) = fallback.iter().position(|reply| reply.trim().is_empty()) {
            return Err(PawsbotError::EmptyFallbackReply { index });
        }

        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.name()) {
                return Err(PawsbotError::DuplicateRule {
                    name: rule.name().to_string(),
                });
            }
        }

        debug!(
            "Built rule book with {} rules and {} fallback replies",
            rules.len(),
            fallback.len()
        );
        Ok(Self { rules, fallback })
    }

    /// Parses a rule table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RuleTableFile =
            toml::from_str(content).context("Failed to parse rule table TOML")?;
        file.into_rule_book()
    }

    /// Reads and validates a rule table file.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading rule table from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule table: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid rule table: {}", path.display()))
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[TopicRule] {
        &self.rules
    }

    /// The fallback pool, never empty.
    pub fn fallback(&self) -> &[String] {
        &self.fallback
    }
}

/// On-disk shape of a rule table.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RuleTableFile {
    #[serde(default)]
    rules: Vec<RuleEntry>,
    #[serde(default)]
    fallback: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RuleEntry {
    name: String,
    category: Category,
    triggers: Vec<String>,
    response: String,
}

impl RuleTableFile {
    fn into_rule_book(self) -> Result<RuleBook> {
        let rules = self
            .rules
            .into_iter()
            .map(|entry| TopicRule::new(entry.name, entry.category, entry.triggers, entry.response))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(RuleBook::new(rules, self.fallback)?)
    }
}
