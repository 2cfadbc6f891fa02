//! rubot Telegram Bot
//!
//! A Telegram bot that administers a fixed set of channels and chats.
//! The core of the library is the group layer: every channel and chat keeps
//! a lazily refreshed, time-limited cache of its administrators and answers
//! admin and permission queries from it.

pub mod config;
pub mod groups;
pub mod handlers;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{RubotError, Result};

// Re-export main components for easy access
pub use groups::{Channel, Chat, GroupApi, GroupEntity};
pub use state::{BotContext, BotIdentity, GroupRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
