//! Run-scoped staging for remotely fetched content.
//!
//! One staging directory exists per run, exclusively owned by it. `attach`
//! and `insert` materialize `host:path` arguments into it through the
//! secure-copy collaborator; the whole tree is removed when the last handle
//! drops, on success and error paths alike.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tempfile::TempDir;

use crate::error::ProducerError;
use crate::process::{failure_details, ProcessRunner};

/// A `host:path` argument split at its first colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePath {
    pub host: String,
    pub path: String,
}

impl RemotePath {
    /// Parse an argument as a remote reference; `None` for purely local paths.
    pub fn parse(arg: &str) -> Option<Self> {
        let (host, path) = arg.split_once(':')?;
        Some(Self {
            host: host.to_string(),
            path: path.to_string(),
        })
    }

    /// The original `host:path` form, used as the document label.
    pub fn spec(&self) -> String {
        format!("{}:{}", self.host, self.path)
    }
}

struct StagingInner {
    dir: TempDir,
    fetch_counter: AtomicU64,
    copy_program: String,
    runner: Arc<dyn ProcessRunner>,
}

/// Shared handle to the run's staging directory.
///
/// Clones share ownership; the directory disappears when the last clone is
/// dropped.
#[derive(Clone)]
pub struct Staging {
    inner: Arc<StagingInner>,
}

impl Staging {
    /// Create the staging directory under the OS temp root.
    pub fn new(copy_program: impl Into<String>, runner: Arc<dyn ProcessRunner>) -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("missive-").tempdir()?;
        Ok(Self {
            inner: Arc::new(StagingInner {
                dir,
                fetch_counter: AtomicU64::new(0),
                copy_program: copy_program.into(),
                runner,
            }),
        })
    }

    /// Root of the staging directory.
    pub fn dir(&self) -> &Path {
        self.inner.dir.path()
    }

    /// Copy `remote` into the staging directory and return the staged path.
    pub fn fetch(&self, remote: &RemotePath) -> Result<PathBuf, ProducerError> {
        if remote.host.is_empty() || remote.path.is_empty() {
            return Err(ProducerError::InvalidRemotePath(remote.spec()));
        }

        let n = self.inner.fetch_counter.fetch_add(1, Ordering::Relaxed);
        let dest = self.dir().join(format!("fetch-{n}"));
        let args = vec![remote.spec(), dest.display().to_string()];

        let output = self
            .inner
            .runner
            .run(&self.inner.copy_program, &args)
            .map_err(|e| ProducerError::RemoteCopyFailed {
                spec: remote.spec(),
                details: format!("{}: {e}", self.inner.copy_program),
            })?;
        if !output.success() {
            return Err(ProducerError::RemoteCopyFailed {
                spec: remote.spec(),
                details: failure_details(&output),
            });
        }
        Ok(dest)
    }
}
