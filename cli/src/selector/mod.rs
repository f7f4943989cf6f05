//! # Pawsbot Response Selector
//!
//! File: cli/src/selector/mod.rs
//!
//! ## Overview
//!
//! This module turns one customer message into one canned reply. It is the
//! only piece of pawsbot with decision logic, and it is deliberately pure:
//! no I/O, no timing, no memory of earlier messages.
//!
//! ## Architecture
//!
//! Selection runs in two phases:
//! 1. **Classification** (deterministic): the message is lower-cased and the
//!    rules of the `RuleBook` are tried in declared order. The first rule
//!    with any trigger contained in the message wins.
//! 2. **Fallback** (random): if no rule matched, one reply is drawn from the
//!    fallback pool using the injected `IndexSource`, tagged `default`.
//!
//! Submodules:
//! - `rules`: `TopicRule`, `RuleBook`, rule table loading and validation
//! - `catalog`: the built-in storefront rule table
//! - `random`: `IndexSource` and its implementations
//!
//! ## Examples
//!
//! ```
//! use pawsbot::selector::{Category, FixedIndex, ResponseSelector, RuleBook};
//!
//! let selector = ResponseSelector::with_source(RuleBook::builtin(), FixedIndex(0));
//!
//! let reply = selector.select("Do you ship to Berlin?");
//! assert_eq!(reply.category, Category::Informational);
//!
//! let reply = selector.select("banana");
//! assert_eq!(reply.category, Category::Default);
//! ```
//!
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

pub mod catalog;
pub mod random;
pub mod rules;

pub use random::{CycleIndex, FixedIndex, IndexSource, SeededSource, ThreadRngSource};
pub use rules::{RuleBook, TopicRule};

/// Display category attached to every reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Informational,
    Promotional,
    Default,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Informational => "informational",
            Category::Promotional => "promotional",
            Category::Default => "default",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The selector's output: a template copied verbatim plus its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub category: Category,
}

/// Picks a reply for a message from an immutable `RuleBook`.
///
/// Holds no mutable state of its own; any number of callers can share one
/// selector behind a reference.
#[derive(Debug)]
pub struct ResponseSelector<S = ThreadRngSource> {
    book: RuleBook,
    source: S,
}

impl ResponseSelector<ThreadRngSource> {
    /// Selector drawing fallback replies from the thread-local RNG.
    pub fn new(book: RuleBook) -> Self {
        Self::with_source(book, ThreadRngSource)
    }
}

impl<S: IndexSource> ResponseSelector<S> {
    /// Selector drawing fallback replies from `source`.
    pub fn with_source(book: RuleBook, source: S) -> Self {
        Self { book, source }
    }

    pub fn rule_book(&self) -> &RuleBook {
        &self.book
    }

    /// Returns the first rule matching `utterance`, if any.
    pub fn classify(&self, utterance: &str) -> Option<&TopicRule> {
        let normalized = utterance.to_lowercase();
        self.book.rules().iter().find(|rule| rule.matches(&normalized))
    }

    /// Produces exactly one reply for `utterance`.
    pub fn select(&self, utterance: &str) -> Reply {
        if let Some(rule) = self.classify(utterance) {
            debug!("Message matched rule '{}'", rule.name());
            return Reply {
                text: rule.response().to_string(),
                category: rule.category(),
            };
        }

        let pool = self.book.fallback();
        // `RuleBook::new` rejects empty pools.
        let index = self.source.pick(pool.len()).min(pool.len() - 1);
        debug!("No rule matched; using fallback reply #{}", index);
        trace!("Unmatched message: {:?}", utterance);
        Reply {
            text: pool[index].clone(),
            category: Category::Default,
        }
    }

    /// Like `select`, treating a missing message as the empty string.
    pub fn select_optional(&self, utterance: Option<&str>) -> Reply {
        self.select(utterance.unwrap_or_default())
    }
}
