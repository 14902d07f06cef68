//! Telegram Bot Probe Library
//!
//! This library provides tools to:
//! - Resolve bot credentials from a JSON config file or environment variables
//! - Send a formatted test message through the Telegram Bot API
//! - Validate a bot token by fetching its identity (getMe)

pub mod config;
pub mod error;
pub mod probe;

// Re-export common types
pub use config::{CredentialSource, Credentials, CHAT_ID_ENV, DEFAULT_CONFIG_PATH, TOKEN_ENV};
pub use error::{Error, Result};
pub use probe::{redact_token, BotInfo, BotProbe, DEFAULT_TIMEOUT_SECS, TEST_MESSAGE};
