//! Configuration loading from environment variables.
//!
//! All configuration is read once at startup and never mutated afterwards.
//! The loaded `Config` is passed by reference into every handler instead of
//! living in process-wide globals, so the "compute once, read-only
//! thereafter" contract is explicit in the types.

use crate::engine::Provider;
use crate::error::ConfigError;

/// Environment variable holding the required Discord bot token.
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";

/// Environment variables for the optional search-API credentials. Loaded for
/// diagnostics; no command in scope consumes them yet.
pub const SEARCH_KEY_VAR: &str = "GOOGLE_SEARCH_API_KEY";
pub const SEARCH_ENGINE_ID_VAR: &str = "GOOGLE_SEARCH_ENGINE_ID";

/// Immutable process configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token. Required; startup aborts without it.
    pub discord_token: String,
    /// Per-provider AI secrets. Absence is normal, not an error.
    pub gemini_api_key: Option<String>,
    pub deepseek_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    /// Optional search-API credentials (loaded, currently unused).
    pub google_search_api_key: Option<String>,
    pub google_search_engine_id: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an injectable lookup, so tests can supply
    /// a fixed environment without touching process state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank-is-missing applies to the required token only. Optional
        // secrets pass through as loaded: a present-but-blank key reports
        // as present and is rejected by format validation instead.
        let Some(discord_token) =
            lookup(DISCORD_TOKEN_VAR).filter(|value| !value.trim().is_empty())
        else {
            return Err(ConfigError::MissingToken);
        };

        Ok(Self {
            discord_token,
            gemini_api_key: lookup(Provider::Gemini.env_key()),
            deepseek_api_key: lookup(Provider::DeepSeek.env_key()),
            anthropic_api_key: lookup(Provider::Claude.env_key()),
            groq_api_key: lookup(Provider::Groq.env_key()),
            google_search_api_key: lookup(SEARCH_KEY_VAR),
            google_search_engine_id: lookup(SEARCH_ENGINE_ID_VAR),
        })
    }

    /// The loaded secret for one AI provider, if any.
    pub fn secret_for(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Gemini => self.gemini_api_key.as_deref(),
            Provider::DeepSeek => self.deepseek_api_key.as_deref(),
            Provider::Claude => self.anthropic_api_key.as_deref(),
            Provider::Groq => self.groq_api_key.as_deref(),
        }
    }

    /// Presence of every raw configuration value, in a stable order.
    /// Used by the debug report; presence only, never validity.
    pub fn presence(&self) -> Vec<(&'static str, bool)> {
        let mut out = vec![(DISCORD_TOKEN_VAR, true)];
        for provider in Provider::ALL {
            out.push((provider.env_key(), self.secret_for(provider).is_some()));
        }
        out.push((SEARCH_KEY_VAR, self.google_search_api_key.is_some()));
        out.push((
            SEARCH_ENGINE_ID_VAR,
            self.google_search_engine_id.is_some(),
        ));
        out
    }

    /// Log one diagnostic line per configured value. Character counts only;
    /// the secret itself is never printed.
    pub fn log_presence(&self) {
        let count = |value: &Option<String>| value.as_deref().map(str::len);
        let entries = [
            (DISCORD_TOKEN_VAR, Some(self.discord_token.len())),
            (Provider::Gemini.env_key(), count(&self.gemini_api_key)),
            (Provider::DeepSeek.env_key(), count(&self.deepseek_api_key)),
            (Provider::Claude.env_key(), count(&self.anthropic_api_key)),
            (Provider::Groq.env_key(), count(&self.groq_api_key)),
            (SEARCH_KEY_VAR, count(&self.google_search_api_key)),
            (SEARCH_ENGINE_ID_VAR, count(&self.google_search_engine_id)),
        ];
        for (name, chars) in entries {
            match chars {
                Some(n) => tracing::info!("{name}: present ({n} chars)"),
                None => tracing::info!("{name}: not set"),
            }
        }
    }
}
