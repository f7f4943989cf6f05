//! # Pawsbot
//!
//! File: cli/src/lib.rs
//!
//! Library half of the pawsbot crate: the rule-based response selector that
//! powers the storefront chat assistant, the conversation log that a chat
//! front-end keeps around it, and the shared configuration and error types.
//!
//! - `selector`: rule books, the built-in catalog, random index providers,
//!   and `ResponseSelector` itself
//! - `conversation`: `ConversationLog`, `DelayPolicy`, `ChatSession`
//! - `core`: configuration loading and error types
//!
pub mod conversation;
pub mod core;
pub mod selector;
