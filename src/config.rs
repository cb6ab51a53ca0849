//! Configuration loading for `missive.toml`.
//!
//! The config file is optional. Search order: explicit `--config` path
//! (which must exist and parse), `./missive.toml`, then
//! `<user config dir>/missive/missive.toml`. The raw file shape is parsed
//! into `FileConfig` and resolved into `Config` with defaults filled in.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Raw on-disk config shape; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    display: Option<FileDisplayConfig>,
    remote: Option<FileRemoteConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileDisplayConfig {
    color: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileRemoteConfig {
    copy_program: Option<String>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub display: DisplayConfig,
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Whether ANSI color/style output is enabled.
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// The secure-copy collaborator used to stage `host:path` arguments.
    pub copy_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig { color: true },
            remote: RemoteConfig {
                copy_program: "scp".to_string(),
            },
        }
    }
}

/// Load configuration from disk.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(path_override, |path| fs::read_to_string(path), dirs::config_dir)
}

fn load_config_from_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let text = match path_override {
        Some(path) => Some(read_file(Path::new(path)).map_err(|e| {
            ConfigError::Invalid(format!("failed to read config `{path}`: {e}"))
        })?),
        None => read_first_candidate(&read_file, &config_root)?,
    };

    let Some(text) = text else {
        return Ok(Config::default());
    };
    let parsed: FileConfig = toml::from_str(&text)?;
    Ok(resolve(parsed))
}

fn read_first_candidate<FRead, FRoot>(
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let mut candidates = vec![PathBuf::from("missive.toml")];
    if let Some(root) = config_root() {
        candidates.push(root.join("missive").join("missive.toml"));
    }

    for candidate in candidates {
        match read_file(&candidate) {
            Ok(text) => return Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::Io(e)),
        }
    }
    Ok(None)
}

fn resolve(file: FileConfig) -> Config {
    let mut config = Config::default();
    if let Some(display) = file.display {
        if let Some(color) = display.color {
            config.display.color = color;
        }
    }
    if let Some(remote) = file.remote {
        if let Some(copy_program) = remote.copy_program {
            config.remote.copy_program = copy_program;
        }
    }
    config
}
