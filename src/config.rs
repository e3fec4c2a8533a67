//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_BOT_NAME: &str = "bot";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("BOT_NAME must not be empty or \"user\"")]
    InvalidBotName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub bot_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            bot_name: DEFAULT_BOT_NAME.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `static`
    /// - `BOT_NAME`: sender tag on replies, default `bot`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("STATIC_DIR").ok().as_deref(),
            std::env::var("BOT_NAME").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, static_dir: Option<&str>, bot_name: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let static_dir = static_dir.map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);
        let bot_name = bot_name.map_or(DEFAULT_BOT_NAME, str::trim).to_owned();
        // A bot tagged "user" would render as the local user's own messages.
        if bot_name.is_empty() || bot_name == frames::USER_SENDER {
            return Err(ConfigError::InvalidBotName);
        }

        Ok(Self { port, static_dir, bot_name })
    }
}
