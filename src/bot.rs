//! Discord event wiring.
//!
//! The gateway client owns the event loop; this module maps incoming
//! messages onto command handlers and sends their replies. All shared state
//! is written once at startup and read-only afterwards, so handlers take it
//! behind an `Arc` with no locking.

use std::sync::Arc;

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::{Context, EventHandler};

use crate::commands;
use crate::config::Config;
use crate::engine::{Capabilities, EngineRegistry};

/// Default command trigger character.
pub const DEFAULT_PREFIX: char = '!';

/// Startup-computed state shared by every handler.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub registry: EngineRegistry,
    pub capabilities: Capabilities,
    pub prefix: char,
}

/// Serenity event handler for the bot.
pub struct Handler {
    pub state: Arc<AppState>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("connected to discord as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(reply) = dispatch(&self.state, &msg.content).await else {
            return;
        };
        // Send failures stay inside this handler; the event loop never sees
        // them.
        if let Err(e) = msg.channel_id.say(&ctx.http, reply).await {
            tracing::warn!("failed to send reply: {e}");
        }
    }
}

/// Map a raw message onto a command reply. `None` means the message is not
/// a command and is ignored.
pub async fn dispatch(state: &AppState, content: &str) -> Option<String> {
    let body = content.trim().strip_prefix(state.prefix)?;
    let command = body.split_whitespace().next()?;
    match command {
        "debug" => Some(commands::debug_report(
            &state.config,
            &state.registry,
            &state.capabilities,
        )),
        "test" => {
            Some(commands::run_test(&state.config, &state.registry, &state.capabilities).await)
        }
        "help" => Some(commands::help_text()),
        "menu" => Some("The !menu command is not implemented yet.".to_string()),
        other => Some(format!("Unknown command `{other}`. Try !help.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DISCORD_TOKEN_VAR;
    use std::collections::HashMap;

    fn state_with(secrets: &[(&str, String)]) -> AppState {
        let mut env: HashMap<&str, String> = HashMap::from([(DISCORD_TOKEN_VAR, "token".into())]);
        for (name, value) in secrets {
            env.insert(*name, value.clone());
        }
        let config = Config::from_lookup(|name| env.get(name).cloned()).expect("token present");
        let registry = EngineRegistry::build(&config);
        AppState {
            config,
            registry,
            capabilities: Capabilities::detect(),
            prefix: DEFAULT_PREFIX,
        }
    }

    #[tokio::test]
    async fn non_prefixed_messages_are_ignored() {
        let state = state_with(&[]);
        assert_eq!(dispatch(&state, "hello there").await, None);
        assert_eq!(dispatch(&state, "").await, None);
    }

    #[tokio::test]
    async fn bare_prefix_is_ignored() {
        let state = state_with(&[]);
        assert_eq!(dispatch(&state, "!").await, None);
        assert_eq!(dispatch(&state, "!   ").await, None);
    }

    #[tokio::test]
    async fn debug_command_reports_state() {
        let state = state_with(&[]);
        let reply = dispatch(&state, "!debug").await.expect("a reply");
        assert!(reply.contains("Debug report"));
        assert!(reply.contains("Available engines: none"));
    }

    #[tokio::test]
    async fn test_command_with_empty_registry_replies_no_engines() {
        let state = state_with(&[]);
        let reply = dispatch(&state, "!test").await.expect("a reply");
        assert_eq!(reply, commands::NO_ENGINES_REPLY);
    }

    #[tokio::test]
    async fn menu_command_replies_not_implemented() {
        let state = state_with(&[]);
        let reply = dispatch(&state, "!menu").await.expect("a reply");
        assert!(reply.contains("not implemented"));
    }

    #[tokio::test]
    async fn unknown_command_gets_a_normal_reply() {
        let state = state_with(&[]);
        let reply = dispatch(&state, "!frobnicate").await.expect("a reply");
        assert!(reply.contains("Unknown command"));
        assert!(reply.contains("frobnicate"));
    }

    #[tokio::test]
    async fn command_arguments_are_tolerated() {
        let state = state_with(&[]);
        let reply = dispatch(&state, "!debug verbose").await.expect("a reply");
        assert!(reply.contains("Debug report"));
    }
}
