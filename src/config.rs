//! Credential configuration for the Telegram probe
//!
//! Loads bot credentials from a JSON config file, falling back to
//! environment variables when the file does not exist.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::error::{Error, Result};

/// Environment fallbacks when no config file is present.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// JSON config structures
#[derive(Debug, Deserialize)]
struct FileConfig {
    telegram: Option<TelegramSection>,
}

#[derive(Debug, Deserialize)]
struct TelegramSection {
    #[serde(default = "default_true")]
    enabled: bool,
    bot_token: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    chat_id: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Deserialize a value that can be either a string or a number
fn deserialize_string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, got {:?}",
            other
        ))),
    }
}

/// Where the credentials came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    File,
    Environment,
}

/// Resolved bot credentials. Either value may be absent.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub source: CredentialSource,
}

impl Credentials {
    /// Read the config file at `path`; when the file does not exist, fall
    /// back to the `TELEGRAM_BOT_TOKEN` / `TELEGRAM_CHAT_ID` environment
    /// variables. A file that exists but does not parse is an error.
    pub fn resolve(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(raw) => Self::from_json(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, trying environment variables");
                Ok(Self::from_env())
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn from_json(raw: &str) -> Result<Self> {
        let parsed: FileConfig = serde_json::from_str(raw)
            .map_err(|e| Error::Config(format!("invalid config file: {}", e)))?;

        let (bot_token, chat_id) = match parsed.telegram {
            Some(section) => {
                if !section.enabled {
                    warn!("telegram.enabled is false in config, probing anyway");
                }
                (non_empty(section.bot_token), non_empty(section.chat_id))
            }
            None => (None, None),
        };

        Ok(Self {
            bot_token,
            chat_id,
            source: CredentialSource::File,
        })
    }

    fn from_env() -> Self {
        Self {
            bot_token: non_empty(env::var(TOKEN_ENV).ok()),
            chat_id: non_empty(env::var(CHAT_ID_ENV).ok()),
            source: CredentialSource::Environment,
        }
    }

    /// Token and chat id, when both are present.
    pub fn into_pair(self) -> Option<(String, String)> {
        match (self.bot_token, self.chat_id) {
            (Some(token), Some(chat_id)) => Some((token, chat_id)),
            _ => None,
        }
    }

    /// Token and chat id, or `MissingCredentials` when either is absent.
    pub fn require_pair(self) -> Result<(String, String)> {
        self.into_pair().ok_or(Error::MissingCredentials)
    }

    /// Example config document shown in the missing-credentials guidance.
    pub fn example_json() -> String {
        let example = json!({
            "telegram": {
                "enabled": true,
                "bot_token": "123456789:ABCdefGhIJKlmNoPQRsTUVwxyZ",
                "chat_id": "123456789"
            }
        });
        serde_json::to_string_pretty(&example).unwrap_or_default()
    }
}

/// Empty strings count as absent, matching the presence checks downstream.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
