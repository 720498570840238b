//! AI engine availability: credential format validation and the startup
//! registry of usable providers.
//!
//! Validation is a heuristic prefix/length check only. It never calls the
//! remote service, so a key can pass here and still be rejected by the
//! provider at use time. That failure surfaces in the command that made the
//! call, not at startup.

#[cfg(feature = "gemini-client")]
pub mod gemini;

use std::fmt;

use crate::config::Config;

/// An external AI text-generation service.
///
/// The declaration order of `ALL` is the hand-chosen priority order; the
/// first validated entry is the engine the test command exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    DeepSeek,
    Claude,
    Groq,
}

impl Provider {
    /// All providers, in priority order.
    pub const ALL: [Provider; 4] = [
        Provider::Gemini,
        Provider::DeepSeek,
        Provider::Claude,
        Provider::Groq,
    ];

    /// Short identifier used in replies and diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI",
            Provider::DeepSeek => "DEEPSEEK",
            Provider::Claude => "CLAUDE",
            Provider::Groq => "GROQ",
        }
    }

    /// Environment variable holding this provider's secret.
    pub const fn env_key(self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::DeepSeek => "DEEPSEEK_API_KEY",
            Provider::Claude => "ANTHROPIC_API_KEY",
            Provider::Groq => "GROQ_API_KEY",
        }
    }

    /// The credential format rule for this provider.
    pub const fn rule(self) -> ValidationRule {
        match self {
            Provider::Gemini => ValidationRule {
                prefix: "AIza",
                min_len: 30,
            },
            Provider::DeepSeek => ValidationRule {
                prefix: "sk-",
                min_len: 20,
            },
            Provider::Claude => ValidationRule {
                prefix: "sk-ant-",
                min_len: 30,
            },
            Provider::Groq => ValidationRule {
                prefix: "gsk_",
                min_len: 20,
            },
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-provider credential format rule: required prefix and a strict
/// minimum length. Static, compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    pub prefix: &'static str,
    pub min_len: usize,
}

/// Whether a credential looks well-formed for a rule.
///
/// True iff the secret is present, starts with the rule's prefix, and is
/// strictly longer than the minimum. Pure; no I/O.
pub fn validate(secret: Option<&str>, rule: &ValidationRule) -> bool {
    match secret {
        Some(value) => value.starts_with(rule.prefix) && value.len() > rule.min_len,
        None => false,
    }
}

/// The ordered set of providers judged available at startup.
///
/// Built exactly once, before the gateway connects, and read-only for the
/// rest of the process lifetime. A key revoked after startup is only
/// noticed when a call to it fails.
#[derive(Debug, Clone)]
pub struct EngineRegistry {
    available: Vec<Provider>,
}

impl EngineRegistry {
    /// Validate every provider's credential in priority order and collect
    /// the ones that pass. Emits one status line per provider.
    pub fn build(config: &Config) -> Self {
        let mut available = Vec::new();
        for provider in Provider::ALL {
            let secret = config.secret_for(provider);
            if validate(secret, &provider.rule()) {
                tracing::info!("engine {provider}: available");
                available.push(provider);
            } else if secret.is_some() {
                tracing::warn!("engine {provider}: credential present but invalid format");
            } else {
                tracing::info!("engine {provider}: no credential");
            }
        }
        Self { available }
    }

    /// The available providers, in priority order.
    pub fn providers(&self) -> &[Provider] {
        &self.available
    }

    /// The first available provider, if any.
    pub fn first(&self) -> Option<Provider> {
        self.available.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }
}

/// Build-time capability flags for optional client libraries.
///
/// Replaces the reflective "try the import and catch" probe from earlier
/// designs with explicit flags resolved at compile time.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    /// The Gemini HTTP client is compiled in; gates the live test path.
    pub gemini_client: bool,
    /// The web-search client is compiled in.
    pub search_client: bool,
}

impl Capabilities {
    pub const fn detect() -> Self {
        Self {
            gemini_client: cfg!(feature = "gemini-client"),
            search_client: cfg!(feature = "search-client"),
        }
    }
}
