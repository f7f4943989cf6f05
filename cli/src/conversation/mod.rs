//! # Pawsbot Conversation Log
//!
//! File: cli/src/conversation/mod.rs
//!
//! ## Overview
//!
//! Everything on the *caller* side of the selector lives here: the message
//! records shown in the chat window, the append-only log that owns them, the
//! presentation delay before a bot reply appears, and the session that ties
//! those together.
//!
//! ## Architecture
//!
//! - `ConversationLog` (this file): assigns identifiers and timestamps and
//!   only ever grows. There is no edit, retract, or eviction.
//! - `delay`: `DelayPolicy`, the "bot is typing" pause.
//! - `session`: `ChatSession`, which trims input, asks the selector for a
//!   reply, waits out the delay and appends both sides of the exchange.
//!
use crate::selector::Category;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod delay;
pub mod session;

pub use delay::DelayPolicy;
pub use session::ChatSession;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Set on bot messages only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Append-only, session-scoped list of messages.
///
/// Identifiers start at 1 and increase by one per appended message.
#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a user message.
    pub fn append_user(&mut self, text: impl Into<String>) -> &Message {
        self.append(Sender::User, text.into(), None)
    }

    /// Records a bot message with its display category.
    pub fn append_bot(&mut self, text: impl Into<String>, category: Category) -> &Message {
        self.append(Sender::Bot, text.into(), Some(category))
    }

    fn append(&mut self, sender: Sender, text: String, category: Option<Category>) -> &Message {
        let id = self.messages.len() as u64 + 1;
        self.messages.push(Message {
            id,
            sender,
            text,
            timestamp: Utc::now(),
            category,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
