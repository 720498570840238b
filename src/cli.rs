//! CLI argument parsing via clap.

use clap::Parser;

use relaybot::bot::DEFAULT_PREFIX;
use relaybot::liveness::DEFAULT_PORT;

/// Discord bot that relays commands to AI engines and serves a liveness
/// endpoint for the hosting platform.
#[derive(Debug, Parser)]
#[command(name = "relaybot", version)]
pub struct Args {
    /// Port for the liveness HTTP endpoint.
    #[arg(long = "port", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Command trigger character.
    #[arg(long = "prefix", default_value_t = DEFAULT_PREFIX)]
    pub prefix: char,
}
