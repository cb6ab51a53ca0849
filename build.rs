//! Embeds VCS and build-time metadata for the `--version` surface.
//!
//! Kept dependency-free and resilient: when git/date tooling is unavailable
//! the constants fall back to a stable "unknown" marker.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=MISSIVE_BUILD_GIT_HASH");
    println!("cargo:rerun-if-env-changed=MISSIVE_BUILD_TIMESTAMP");

    let git_hash = std::env::var("MISSIVE_BUILD_GIT_HASH")
        .unwrap_or_else(|_| capture("git", &["rev-parse", "--short=12", "HEAD"]));
    let timestamp = std::env::var("MISSIVE_BUILD_TIMESTAMP")
        .unwrap_or_else(|_| capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]));

    println!("cargo:rustc-env=MISSIVE_BUILD_GIT_HASH={git_hash}");
    println!("cargo:rustc-env=MISSIVE_BUILD_TIMESTAMP={timestamp}");
}

fn capture(program: &str, args: &[&str]) -> String {
    let Ok(output) = Command::new(program).args(args).output() else {
        return "unknown".to_string();
    };
    if !output.status.success() {
        return "unknown".to_string();
    }
    let text = String::from_utf8_lossy(&output.stdout);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "unknown".to_string()
    } else {
        trimmed.to_string()
    }
}
