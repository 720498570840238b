//! Chat command handlers: debug report and engine test.
//!
//! Handlers are pure reads of startup state wherever possible. The only
//! side effect in this module is the live provider call made by `!test`
//! when the first available engine has an implemented test path.

use crate::config::Config;
use crate::engine::{Capabilities, EngineRegistry, Provider};

/// Reply sent by `!test` when the registry is empty. Not an error path;
/// no external call is made.
pub const NO_ENGINES_REPLY: &str = "No AI engines available for testing!";

/// Build the `!debug` report: presence of each raw configuration value,
/// the ordered available-engine list, and the client capability flags.
/// Presence only, never validity, never the values themselves.
pub fn debug_report(config: &Config, registry: &EngineRegistry, caps: &Capabilities) -> String {
    let mut report = String::from("**Debug report**\n");

    report.push_str("Configuration:\n");
    for (name, present) in config.presence() {
        let marker = if present { "set" } else { "missing" };
        report.push_str(&format!("  {name}: {marker}\n"));
    }

    report.push_str("Available engines: ");
    if registry.is_empty() {
        report.push_str("none");
    } else {
        let labels: Vec<&str> = registry
            .providers()
            .iter()
            .map(|provider| provider.label())
            .collect();
        report.push_str(&labels.join(", "));
    }
    report.push('\n');

    report.push_str(&format!(
        "Gemini client: {}\nSearch client: {}",
        compiled_marker(caps.gemini_client),
        compiled_marker(caps.search_client),
    ));
    report
}

fn compiled_marker(present: bool) -> &'static str {
    if present {
        "compiled in"
    } else {
        "not compiled in"
    }
}

/// What the test command will do, decided purely from startup state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDecision {
    /// Registry is empty; reply and return without side effects.
    NoEngines,
    /// First available engine has a live test path.
    LiveGemini,
    /// First available engine is registered but has no test path yet.
    NotImplemented(Provider),
}

/// Select the first available engine and decide how `!test` handles it.
pub fn decide_test(registry: &EngineRegistry, caps: &Capabilities) -> TestDecision {
    match registry.first() {
        None => TestDecision::NoEngines,
        Some(Provider::Gemini) if caps.gemini_client => TestDecision::LiveGemini,
        Some(provider) => TestDecision::NotImplemented(provider),
    }
}

/// Run the `!test` command and produce the reply text. Provider failures
/// are converted to a user-visible reply here; nothing propagates to the
/// event loop.
pub async fn run_test(config: &Config, registry: &EngineRegistry, caps: &Capabilities) -> String {
    match decide_test(registry, caps) {
        TestDecision::NoEngines => NO_ENGINES_REPLY.to_string(),
        TestDecision::NotImplemented(provider) => not_implemented_reply(provider),
        TestDecision::LiveGemini => live_gemini_test(config).await,
    }
}

/// Reply for a registered engine without an implemented test path.
pub fn not_implemented_reply(provider: Provider) -> String {
    format!(
        "{} is registered and available, but a live test is not implemented for it yet.",
        provider.label()
    )
}

#[cfg(feature = "gemini-client")]
async fn live_gemini_test(config: &Config) -> String {
    use crate::engine::gemini::GeminiClient;

    // Registry membership guarantees the key is present.
    let Some(api_key) = config.secret_for(Provider::Gemini) else {
        return not_implemented_reply(Provider::Gemini);
    };

    gemini_test_reply(&GeminiClient::new(api_key)).await
}

/// Run the fixed test prompt against a client and format the reply. The
/// client is injected so tests can point it at a local server.
#[cfg(feature = "gemini-client")]
async fn gemini_test_reply(client: &crate::engine::gemini::GeminiClient) -> String {
    use crate::engine::gemini::TEST_PROMPT;

    match client.generate(TEST_PROMPT).await {
        Ok(text) => format!("**GEMINI test reply:**\n{text}"),
        Err(e) => {
            tracing::warn!("gemini test call failed: {e}");
            format!("GEMINI test failed: {e}")
        }
    }
}

#[cfg(not(feature = "gemini-client"))]
async fn live_gemini_test(_config: &Config) -> String {
    not_implemented_reply(Provider::Gemini)
}

/// Help text for the `!help` command. `!menu` is documented here but not
/// implemented in this build.
pub fn help_text() -> String {
    [
        "**relaybot commands**",
        "  !debug - report configuration and engine availability",
        "  !test  - query the first available AI engine",
        "  !menu  - browse engines (coming soon)",
        "  !help  - this message",
    ]
    .join("\n")
}
