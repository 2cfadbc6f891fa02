//! Configuration management module
//!
//! This module handles loading and validation of application configuration
//! from TOML files and environment variables, and of the owned chat list.

pub mod chatlist;
pub mod settings;
pub mod validation;

pub use chatlist::{load_chatlist, validate_chatlist, ChatOptions, ChatlistEntry};
pub use settings::{Settings, BotConfig, ChatlistConfig, LoggingConfig};
