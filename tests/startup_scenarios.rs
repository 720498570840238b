//! End-to-end startup scenarios: a fixed environment in, the registry and
//! command replies out. No network and no gateway; the lookup closure
//! stands in for the process environment.

use std::collections::HashMap;

use relaybot::commands::{
    debug_report, decide_test, run_test, TestDecision, NO_ENGINES_REPLY,
};
use relaybot::config::Config;
use relaybot::engine::{Capabilities, EngineRegistry, Provider};
use relaybot::error::ConfigError;

fn load(env: &HashMap<&'static str, String>) -> Config {
    Config::from_lookup(|name| env.get(name).cloned()).expect("token present")
}

fn env_with(secrets: &[(&'static str, String)]) -> HashMap<&'static str, String> {
    let mut env = HashMap::from([("DISCORD_TOKEN", "token".to_string())]);
    for (name, value) in secrets {
        env.insert(name, value.clone());
    }
    env
}

fn all_caps() -> Capabilities {
    Capabilities {
        gemini_client: true,
        search_client: true,
    }
}

#[tokio::test]
async fn all_secrets_absent_yields_empty_registry_and_no_engines_reply() {
    let config = load(&env_with(&[]));
    let registry = EngineRegistry::build(&config);

    assert!(registry.is_empty());

    let report = debug_report(&config, &registry, &all_caps());
    for provider in Provider::ALL {
        assert!(
            report.contains(&format!("{}: missing", provider.env_key())),
            "report: {report}"
        );
    }

    let reply = run_test(&config, &registry, &all_caps()).await;
    assert_eq!(reply, NO_ENGINES_REPLY);
}

#[test]
fn gemini_shaped_key_alone_registers_gemini_and_selects_the_live_path() {
    let env = env_with(&[("GEMINI_API_KEY", format!("AIza{}", "x".repeat(31)))]);
    let config = load(&env);
    let registry = EngineRegistry::build(&config);

    let labels: Vec<&str> = registry.providers().iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["GEMINI"]);
    assert_eq!(decide_test(&registry, &all_caps()), TestDecision::LiveGemini);
}

#[test]
fn short_sk_key_is_rejected_and_excluded() {
    // "sk-" + 5 chars is length 8, below the >20 threshold.
    let env = env_with(&[("DEEPSEEK_API_KEY", "sk-xxxxx".to_string())]);
    let config = load(&env);
    let registry = EngineRegistry::build(&config);
    assert!(registry.is_empty());
}

#[test]
fn missing_bot_token_fails_before_any_handler_exists() {
    let err = Config::from_lookup(|_| None).expect_err("must fail");
    assert!(matches!(err, ConfigError::MissingToken));
}

#[tokio::test]
async fn two_valid_keys_pick_the_earlier_priority_engine() {
    let env = env_with(&[
        ("ANTHROPIC_API_KEY", format!("sk-ant-{}", "x".repeat(30))),
        ("GROQ_API_KEY", format!("gsk_{}", "x".repeat(20))),
    ]);
    let config = load(&env);
    let registry = EngineRegistry::build(&config);

    assert_eq!(registry.providers(), &[Provider::Claude, Provider::Groq]);

    // Claude has no live test path; the reply names it as registered.
    let reply = run_test(&config, &registry, &all_caps()).await;
    assert!(reply.contains("CLAUDE"), "reply: {reply}");
    assert!(reply.contains("not implemented"), "reply: {reply}");
}

#[test]
fn registry_is_idempotent_for_a_fixed_environment() {
    let env = env_with(&[
        ("GEMINI_API_KEY", format!("AIza{}", "x".repeat(31))),
        ("DEEPSEEK_API_KEY", format!("sk-{}", "x".repeat(21))),
    ]);
    let config = load(&env);
    let first = EngineRegistry::build(&config);
    for _ in 0..3 {
        let again = EngineRegistry::build(&config);
        assert_eq!(again.providers(), first.providers());
    }
    assert_eq!(first.providers(), &[Provider::Gemini, Provider::DeepSeek]);
}
