//! relaybot — a Discord bot that relays commands to AI text-generation
//! services and reports diagnostic status about its own configuration.
//!
//! On startup the bot validates which AI provider credentials are present
//! and well-formed, builds an immutable [`engine::EngineRegistry`] of
//! available engines, starts a liveness HTTP endpoint on a background
//! thread, and then serves prefix commands over the Discord gateway.
//!
//! Credential validation is a format heuristic (prefix + length), not a
//! live probe: a key that looks right can still be rejected by the
//! provider at call time, and that failure surfaces in the chat reply of
//! the command that triggered it.

pub mod bot;
pub mod build_info;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod liveness;
