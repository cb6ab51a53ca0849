//! Unified error types for the composer pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ProducerError
// ---------------------------------------------------------------------------

/// Errors arising from subcommand producers.
#[derive(Debug)]
pub enum ProducerError {
    /// A local path argument does not exist.
    FileNotFound(PathBuf),
    /// A `host:path` argument with an empty host or empty remote path.
    InvalidRemotePath(String),
    /// The secure-copy collaborator failed to stage a remote file.
    RemoteCopyFailed {
        /// The original `host:path` spec.
        spec: String,
        /// Collaborator stderr/stdout detail, or the launch error.
        details: String,
    },
    /// An external command could not be launched or exited non-zero.
    CommandFailed(String),
    /// The clipboard backend could not be opened or read.
    ClipboardUnavailable(String),
    /// Any other I/O failure on a named path.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ProducerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "file does not exist: {}", path.display()),
            Self::InvalidRemotePath(arg) => write!(f, "invalid remote file path: {arg}"),
            Self::RemoteCopyFailed { spec, details } => {
                write!(f, "failed to copy remote file {spec}: {details}")
            }
            Self::CommandFailed(msg) => write!(f, "command execution failed: {msg}"),
            Self::ClipboardUnavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            Self::Io { path, source } => write!(f, "io error on {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for ProducerError {}

// ---------------------------------------------------------------------------
// SegmentError
// ---------------------------------------------------------------------------

/// Errors from comma-rule segmentation.
#[derive(Debug, PartialEq, Eq)]
pub enum SegmentError {
    /// Tokens were given, but the comma rules left no subcommand to run.
    MissingSubcommand,
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSubcommand => write!(f, "missing subcommand"),
        }
    }
}

impl std::error::Error for SegmentError {}

// ---------------------------------------------------------------------------
// DispatchError
// ---------------------------------------------------------------------------

/// Errors when resolving or running one subcommand invocation.
#[derive(Debug)]
pub enum DispatchError {
    /// The segment carried no tokens at all.
    NoSubcommandProvided,
    /// The candidate name is a prefix of no registered subcommand.
    Unknown(String),
    /// The candidate name is a prefix of more than one registered subcommand.
    Ambiguous(String),
    /// The resolved producer failed; propagated unchanged.
    Producer(ProducerError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSubcommandProvided => write!(f, "no subcommand provided"),
            Self::Unknown(name) => write!(f, "unknown subcommand: {name}"),
            Self::Ambiguous(name) => write!(f, "ambiguous subcommand: {name}"),
            Self::Producer(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DispatchError {}

impl From<ProducerError> for DispatchError {
    fn from(e: ProducerError) -> Self {
        Self::Producer(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// MissiveError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for one composer run.
#[derive(Debug)]
pub enum MissiveError {
    Config(ConfigError),
    Segment(SegmentError),
    Dispatch(DispatchError),
    /// The staging directory could not be created.
    Staging(io::Error),
    /// The finished document could not be written to its destination.
    Output { dest: String, source: io::Error },
    /// The finished document could not be placed on the clipboard.
    Clipboard(String),
}

impl fmt::Display for MissiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Segment(e) => write!(f, "{e}"),
            Self::Dispatch(e) => write!(f, "{e}"),
            Self::Staging(e) => write!(f, "failed to create staging directory: {e}"),
            Self::Output { dest, source } => {
                write!(f, "failed to write output to {dest}: {source}")
            }
            Self::Clipboard(msg) => write!(f, "clipboard: {msg}"),
        }
    }
}

impl std::error::Error for MissiveError {}

impl From<ConfigError> for MissiveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SegmentError> for MissiveError {
    fn from(e: SegmentError) -> Self {
        Self::Segment(e)
    }
}

impl From<DispatchError> for MissiveError {
    fn from(e: DispatchError) -> Self {
        Self::Dispatch(e)
    }
}
