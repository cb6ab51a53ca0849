//! Compile-time build metadata exposed to CLI/version surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("MISSIVE_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("MISSIVE_BUILD_TIMESTAMP");

/// Render CLI version block used by `missive --version`.
pub fn cli_version_text() -> String {
    format!("missive {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}
