//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Default lifetime of a cached admin roster
pub const DEFAULT_ADMIN_CACHE_TTL_SECS: u64 = 60;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub chatlist: ChatlistConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Channel the bot reports into; the bot must be able to post there
    pub private_channel_id: Option<i64>,
    pub admin_cache_ttl_secs: u64,
}

/// Location of the owned chat list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatlistConfig {
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Environment variables use the `RUBOT` prefix with `__` between
    /// sections, e.g. `RUBOT__BOT__TOKEN`.
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("bot.admin_cache_ttl_secs", defaults.bot.admin_cache_ttl_secs)?
            .set_default("chatlist.path", defaults.chatlist.path)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("RUBOT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::RubotError> {
        super::validation::validate_settings(self)
    }
}

impl BotConfig {
    /// Roster cache lifetime as a `Duration`
    pub fn admin_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.admin_cache_ttl_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                private_channel_id: None,
                admin_cache_ttl_secs: DEFAULT_ADMIN_CACHE_TTL_SECS,
            },
            chatlist: ChatlistConfig {
                path: ".chatlist.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
