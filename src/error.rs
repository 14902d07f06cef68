//! Error types for the Telegram probe

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing Telegram credentials")]
    MissingCredentials,

    #[error("Unauthorized - check your bot token")]
    Unauthorized,

    #[error("Bad Request - check your chat ID")]
    BadRequest,

    #[error("Telegram API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("invalid config file".to_string());
        assert!(err.to_string().contains("Config error"));
        assert!(err.to_string().contains("invalid config file"));
    }

    #[test]
    fn test_error_display_missing_credentials() {
        let err = Error::MissingCredentials;
        assert!(err.to_string().contains("Missing Telegram credentials"));
    }

    #[test]
    fn test_error_display_unauthorized_mentions_token() {
        let err = Error::Unauthorized;
        let msg = err.to_string();
        assert!(msg.contains("Unauthorized"));
        assert!(msg.contains("bot token"));
    }

    #[test]
    fn test_error_display_bad_request_mentions_chat_id() {
        let err = Error::BadRequest;
        let msg = err.to_string();
        assert!(msg.contains("Bad Request"));
        assert!(msg.contains("chat ID"));
    }

    #[test]
    fn test_error_display_api() {
        let err = Error::Api {
            status: 502,
            body: "bad gateway".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("HTTP 502"));
        assert!(msg.contains("bad gateway"));
    }

    #[test]
    fn test_error_display_connection() {
        let err = Error::Connection("timeout".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Connection error"));
        assert!(msg.contains("timeout"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_debug_impl() {
        let err = Error::Unauthorized;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Unauthorized"));
    }

    #[test]
    fn test_error_all_variants_display_non_empty() {
        let variants: Vec<Error> = vec![
            Error::Config("config".to_string()),
            Error::MissingCredentials,
            Error::Unauthorized,
            Error::BadRequest,
            Error::Api {
                status: 500,
                body: "oops".to_string(),
            },
            Error::Connection("conn".to_string()),
            Error::Serialization("serial".to_string()),
        ];

        for err in variants {
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(Error::MissingCredentials);
        assert!(result.is_err());
    }
}
