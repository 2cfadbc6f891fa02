//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{RubotError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_chatlist_config(&settings.chatlist)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(RubotError::MissingConfig(
            "Telegram bot token (RUBOT__BOT__TOKEN)".to_string()
        ));
    }

    if config.admin_cache_ttl_secs == 0 {
        return Err(RubotError::Config(
            "Admin cache TTL must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate chatlist configuration
fn validate_chatlist_config(config: &super::ChatlistConfig) -> Result<()> {
    if config.path.trim().is_empty() {
        return Err(RubotError::Config(
            "Chatlist path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(RubotError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(RubotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
