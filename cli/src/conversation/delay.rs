//! # Reply Delay Policy
//!
//! File: cli/src/conversation/delay.rs
//!
//! The pause between a customer's message and the bot's reply appearing.
//! It is pure presentation: the reply is already chosen when the pause
//! starts.
//!
use crate::core::error::PawsbotError;
use rand::Rng;
use std::time::Duration;

/// Bounds, in milliseconds, for the "bot is typing" pause.
///
/// `min_ms == max_ms` gives a fixed delay; `0/0` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    pub min_ms: u64,
    pub max_ms: u64,
}

const DEFAULT_MIN_MS: u64 = 600;
const DEFAULT_MAX_MS: u64 = 1400;

impl Default for DelayPolicy {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_MIN_MS,
            max_ms: DEFAULT_MAX_MS,
        }
    }
}

impl DelayPolicy {
    pub fn none() -> Self {
        Self::fixed(0)
    }

    pub fn fixed(ms: u64) -> Self {
        Self {
            min_ms: ms,
            max_ms: ms,
        }
    }

    pub fn is_none(&self) -> bool {
        self.max_ms == 0
    }

    pub fn validate(&self) -> Result<(), PawsbotError> {
        if self.min_ms > self.max_ms {
            return Err(PawsbotError::Config(format!(
                "Reply delay min_ms ({}) is greater than max_ms ({}).",
                self.min_ms, self.max_ms
            )));
        }
        Ok(())
    }

    /// Draws the next pause. Inverted bounds are treated as a fixed delay of
    /// `min_ms`.
    pub fn next_delay(&self) -> Duration {
        let ms = if self.min_ms >= self.max_ms {
            self.min_ms
        } else {
            rand::thread_rng().gen_range(self.min_ms..=self.max_ms)
        };
        Duration::from_millis(ms)
    }
}
