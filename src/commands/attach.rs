//! `attach` — attach files by reference.
//!
//! Local files become lazy file entries read at render time; directories are
//! walked recursively; `host:path` arguments are staged through the
//! secure-copy collaborator first, keeping the remote spec as the label.

use std::fs;
use std::io;
use std::path::Path;

use super::Command;
use crate::entry::Entry;
use crate::error::ProducerError;
use crate::staging::{RemotePath, Staging};

/// Emits one file entry per attached file.
pub struct AttachCommand {
    pub staging: Staging,
}

impl std::fmt::Debug for AttachCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttachCommand").finish_non_exhaustive()
    }
}

impl Command for AttachCommand {
    fn name(&self) -> &'static str {
        "attach"
    }

    fn run(&self, args: &[String]) -> Result<Vec<Entry>, ProducerError> {
        let mut entries = Vec::new();
        for arg in args {
            if let Some(remote) = RemotePath::parse(arg) {
                let staged = self.staging.fetch(&remote)?;
                entries.push(Entry::file(staged, remote.spec()));
                continue;
            }

            let path = Path::new(arg);
            let metadata = fs::metadata(path)
                .map_err(|_| ProducerError::FileNotFound(path.to_path_buf()))?;
            if metadata.is_dir() {
                collect_dir_files(path, &mut entries)?;
            } else {
                entries.push(Entry::local_file(path));
            }
        }
        Ok(entries)
    }
}

/// Walk `dir` in sorted name order, collecting non-hidden regular files.
///
/// Only file names are filtered for the leading dot; hidden directories are
/// still descended into.
fn collect_dir_files(dir: &Path, entries: &mut Vec<Entry>) -> Result<(), ProducerError> {
    let io_err = |e: io::Error| ProducerError::Io {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut children: Vec<fs::DirEntry> = fs::read_dir(dir)
        .map_err(io_err)?
        .collect::<io::Result<_>>()
        .map_err(io_err)?;
    children.sort_by_key(|child| child.file_name());

    for child in children {
        let path = child.path();
        if child.file_type().map_err(io_err)?.is_dir() {
            collect_dir_files(&path, entries)?;
        } else if !child.file_name().to_string_lossy().starts_with('.') {
            entries.push(Entry::local_file(&path));
        }
    }
    Ok(())
}
