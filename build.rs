//! Embeds the git commit and build time for the startup log line and the
//! liveness status page. Falls back to stable markers when git or date
//! tooling is unavailable.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!(
        "cargo:rustc-env=RELAYBOT_BUILD_GIT_HASH={}",
        git_short_hash()
    );
    println!(
        "cargo:rustc-env=RELAYBOT_BUILD_TIMESTAMP={}",
        build_timestamp_utc()
    );
}

fn git_short_hash() -> String {
    command_output("git", &["rev-parse", "--short=12", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string())
}

fn build_timestamp_utc() -> String {
    if let Some(stamp) = command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]) {
        return stamp;
    }
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|delta| delta.as_secs())
        .unwrap_or(0);
    format!("unix:{seconds}")
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
