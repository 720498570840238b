//! Unified error types for the bot.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading configuration from the environment.
#[derive(Debug)]
pub enum ConfigError {
    /// The required Discord bot token is unset or empty.
    MissingToken,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(
                f,
                "DISCORD_TOKEN is not set. Export the bot token before starting relaybot."
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// EngineError
// ---------------------------------------------------------------------------

/// Errors from a live AI-provider call.
#[derive(Debug)]
pub enum EngineError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the provider API.
    Status(u16, String),
    /// The provider returned a response with no usable text.
    EmptyResponse,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code, body) => write!(f, "status {code}: {body}"),
            Self::EmptyResponse => write!(f, "provider returned empty response"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<reqwest::Error> for EngineError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_the_missing_variable() {
        let msg = ConfigError::MissingToken.to_string();
        assert!(msg.contains("DISCORD_TOKEN"), "got: {msg}");
    }

    #[test]
    fn engine_error_status_display() {
        let e = EngineError::Status(429, "quota exceeded".into());
        assert_eq!(e.to_string(), "status 429: quota exceeded");
    }

    #[test]
    fn engine_error_empty_response_display() {
        assert_eq!(
            EngineError::EmptyResponse.to_string(),
            "provider returned empty response"
        );
    }
}
