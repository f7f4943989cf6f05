//! # Chat Session
//!
//! File: cli/src/conversation/session.rs
//!
//! ## Overview
//!
//! `ChatSession` is the owner of one conversation. For every submitted
//! message it:
//! 1. Trims the input and ignores it if nothing is left.
//! 2. Appends the user's message to the log.
//! 3. Asks the selector for a reply (synchronously, before any waiting).
//! 4. Waits out the `DelayPolicy` pause.
//! 5. Appends the reply to the log and returns it.
//!
//! `submit` takes `&mut self`, so a session can never have two replies
//! being composed at the same time; the borrow checker serializes callers.
//!
use super::{ConversationLog, DelayPolicy, Message};
use crate::selector::{Category, IndexSource, ResponseSelector, ThreadRngSource};
use tracing::debug;

pub struct ChatSession<S = ThreadRngSource> {
    selector: ResponseSelector<S>,
    log: ConversationLog,
    delay: DelayPolicy,
}

impl<S: IndexSource> ChatSession<S> {
    pub fn new(selector: ResponseSelector<S>, delay: DelayPolicy) -> Self {
        Self {
            selector,
            log: ConversationLog::new(),
            delay,
        }
    }

    /// Opens the conversation with a bot greeting. Blank greetings are
    /// skipped.
    pub fn with_greeting(mut self, greeting: &str) -> Self {
        if !greeting.trim().is_empty() {
            self.log.append_bot(greeting, Category::Informational);
        }
        self
    }

    /// Handles one customer message and returns the bot's reply, or `None`
    /// if the message was blank.
    pub async fn submit(&mut self, utterance: &str) -> Option<Message> {
        let trimmed = utterance.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.log.append_user(trimmed);
        let reply = self.selector.select(trimmed);

        let pause = self.delay.next_delay();
        if !pause.is_zero() {
            debug!("Delaying reply by {:?}", pause);
            tokio::time::sleep(pause).await;
        }

        Some(self.log.append_bot(reply.text, reply.category).clone())
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn delay(&self) -> DelayPolicy {
        self.delay
    }
}
