//! The entry model: one renderable unit of document content.
//!
//! Every subcommand produces zero or more entries; the renderer turns the
//! ordered entry list into the final markdown document. Entries are immutable
//! values — file content is deliberately NOT captured here, only referenced,
//! so the document reflects the file as it exists at render time.

use std::path::{Path, PathBuf};

/// One unit of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Literal text rendered as its own paragraph.
    Message { text: String },
    /// A file reference rendered as a labelled fenced code block.
    ///
    /// `storage_path` is where the bytes currently live; it differs from
    /// `original_path` when the file was staged from a remote source.
    /// `original_path` is the label shown in the document.
    File {
        storage_path: PathBuf,
        original_path: String,
    },
    /// Captured standard output of an external command.
    Output { text: String },
}

impl Entry {
    /// A message entry from literal text.
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message { text: text.into() }
    }

    /// A command-output entry from captured stdout.
    pub fn output(text: impl Into<String>) -> Self {
        Self::Output { text: text.into() }
    }

    /// A file entry whose storage location differs from its label.
    pub fn file(storage_path: impl Into<PathBuf>, original_path: impl Into<String>) -> Self {
        Self::File {
            storage_path: storage_path.into(),
            original_path: original_path.into(),
        }
    }

    /// A file entry for a local path, labelled by that same path.
    pub fn local_file(path: &Path) -> Self {
        Self::File {
            storage_path: path.to_path_buf(),
            original_path: path.display().to_string(),
        }
    }
}
