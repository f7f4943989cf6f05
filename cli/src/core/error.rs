//! # Pawsbot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout pawsbot. The selector
//! itself cannot fail once built, so every variant here describes a problem
//! found while *building* something: loading configuration, reading a rule
//! table, or validating a rule book before the first reply is produced.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PawsbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if pool.is_empty() {
//!     return Err(PawsbotError::EmptyFallbackPool.into());
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read rule table: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for pawsbot.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PawsbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fallback pool is empty; at least one fallback reply is required.")]
    EmptyFallbackPool,

    #[error("Fallback reply #{index} is empty.")]
    EmptyFallbackReply { index: usize },

    #[error("Rule '{name}' is invalid: {reason}")]
    InvalidRule { name: String, reason: String },

    #[error("Rule '{name}' is declared more than once.")]
    DuplicateRule { name: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = PawsbotError::Config("Missing setting 'foo'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'foo'"
        );

        let invalid_rule = PawsbotError::InvalidRule {
            name: "size".into(),
            reason: "no triggers".into(),
        };
        assert_eq!(invalid_rule.to_string(), "Rule 'size' is invalid: no triggers");

        let duplicate = PawsbotError::DuplicateRule {
            name: "shipping".into(),
        };
        assert_eq!(
            duplicate.to_string(),
            "Rule 'shipping' is declared more than once."
        );
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let err: anyhow::Error = PawsbotError::EmptyFallbackPool.into();
        assert_eq!(
            err.downcast_ref::<PawsbotError>(),
            Some(&PawsbotError::EmptyFallbackPool)
        );
    }
}
