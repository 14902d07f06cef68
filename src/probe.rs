//! Telegram Bot API probe
//!
//! Sends the test notification and checks bot identity through the Bot API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Public Bot API host.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Request timeout applied to every call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fixed test message, Markdown formatted.
pub const TEST_MESSAGE: &str = "🧪 *Test Message* 🧪\n\n\
This is a test from your Telegram probe!\n\n\
✅ Bot is working correctly\n\
🤖 Credentials are valid\n\
📨 Notifications will reach this chat\n\n\
*Setup Complete!* 🎉";

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Standard Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

/// Bot identity returned by `getMe`.
#[derive(Debug, Clone, Deserialize)]
pub struct BotInfo {
    pub first_name: String,
    pub username: Option<String>,
}

/// One-shot Bot API client for a single token/chat pair.
#[derive(Debug, Clone)]
pub struct BotProbe {
    http: Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl BotProbe {
    /// Create a probe with a bounded request timeout.
    pub fn new<S1, S2>(bot_token: S1, chat_id: S2, timeout_secs: u64) -> Result<Self>
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        let http = Client::builder()
            .user_agent(format!("telegram_probe/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Connection(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: TELEGRAM_API_BASE.to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        })
    }

    /// Create a probe with a custom base url (primarily for tests).
    pub fn with_base_url<S1, S2, S3>(
        bot_token: S1,
        chat_id: S2,
        timeout_secs: u64,
        base_url: S3,
    ) -> Result<Self>
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        let mut probe = Self::new(bot_token, chat_id, timeout_secs)?;
        probe.base_url = base_url.into();
        Ok(probe)
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.bot_token, method)
    }

    /// Send the fixed test message to the configured chat.
    ///
    /// Success is any non-error HTTP status. Failures are classified by
    /// status code; nothing is retried.
    pub async fn send_test_message(&self) -> Result<()> {
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text: TEST_MESSAGE,
            parse_mode: "Markdown",
        };

        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_client_error() && !status.is_server_error() {
            info!(chat_id = %self.chat_id, "test message delivered");
            return Ok(());
        }

        if status == StatusCode::UNAUTHORIZED {
            Err(Error::Unauthorized)
        } else if status == StatusCode::BAD_REQUEST {
            Err(Error::BadRequest)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Fetch the bot's identity via `getMe`. Validates the token without
    /// sending anything to the chat.
    pub async fn bot_info(&self) -> Result<BotInfo> {
        let response = self.http.get(self.method_url("getMe")).send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ApiEnvelope<BotInfo> = response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("invalid getMe response: {}", e)))?;

        if !envelope.ok {
            return Err(Error::Api {
                status: status.as_u16(),
                body: envelope
                    .description
                    .unwrap_or_else(|| "ok=false".to_string()),
            });
        }

        envelope
            .result
            .ok_or_else(|| Error::Serialization("getMe response missing result".to_string()))
    }
}

/// First characters of the token for display, never the whole thing.
pub fn redact_token(token: &str) -> String {
    let prefix: String = token.chars().take(10).collect();
    format!("{}...", prefix)
}
