//! Markdown document rendering.
//!
//! Each entry renders to one fragment; fragments are joined with a single
//! blank line. File entries are read here, at render time, so the document
//! reflects the file as it exists now — and a file that has become unreadable
//! is skipped with a warning instead of sinking the whole document, since the
//! remaining entries already represent completed work.

use std::fs;

use crate::entry::Entry;

/// Render the ordered entry list into the final markdown document.
///
/// The result is trimmed and carries exactly one trailing newline; an empty
/// entry list renders to a single newline.
pub fn render(entries: &[Entry]) -> String {
    let mut fragments: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            Entry::Message { text } | Entry::Output { text } => {
                fragments.push(format!("{}\n", text.trim()));
            }
            Entry::File {
                storage_path,
                original_path,
            } => match fs::read(storage_path) {
                Ok(bytes) => {
                    let content = String::from_utf8_lossy(&bytes);
                    fragments.push(format!("`{original_path}`\n```\n{content}```\n"));
                }
                Err(e) => {
                    tracing::warn!(
                        path = %storage_path.display(),
                        error = %e,
                        "skipping unreadable file entry"
                    );
                }
            },
        }
    }
    format!("{}\n", fragments.join("\n").trim())
}
