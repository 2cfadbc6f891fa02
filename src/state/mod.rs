//! State management module
//!
//! This module holds the group registry and the per-update context built on it

pub mod context;
pub mod registry;

// Re-export commonly used state components
pub use context::{BotContext, BotIdentity};
pub use registry::GroupRegistry;
