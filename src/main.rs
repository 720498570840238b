//! Process entry point for relaybot.

mod cli;

use std::sync::Arc;

use clap::Parser;
use serenity::prelude::{Client, GatewayIntents};
use tracing_subscriber::EnvFilter;

use relaybot::bot::{AppState, Handler};
use relaybot::build_info;
use relaybot::config::Config;
use relaybot::engine::{Capabilities, EngineRegistry};
use relaybot::liveness;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("relaybot {}", build_info::startup_metadata_line());

    // Configuration and the engine registry are computed once, before the
    // gateway connects, and never mutated afterwards.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    config.log_presence();

    let registry = EngineRegistry::build(&config);
    let capabilities = Capabilities::detect();

    liveness::spawn(args.port);

    let state = Arc::new(AppState {
        config,
        registry,
        capabilities,
        prefix: args.prefix,
    });

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let client = Client::builder(&state.config.discord_token, intents)
        .event_handler(Handler {
            state: Arc::clone(&state),
        })
        .await;
    let mut client = match client {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to build discord client: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = client.start().await {
        tracing::error!("discord client exited: {e}");
        std::process::exit(1);
    }
}
