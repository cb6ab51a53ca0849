//! `insert` — inline file contents verbatim.
//!
//! Unlike `attach`, the content is read immediately and carried as a message
//! entry, one per argument. Remote arguments go through the same staging
//! path as `attach`.

use std::fs;
use std::path::Path;

use super::Command;
use crate::entry::Entry;
use crate::error::ProducerError;
use crate::staging::{RemotePath, Staging};

/// Emits one message entry per argument, holding that file's full text.
pub struct InsertCommand {
    pub staging: Staging,
}

impl std::fmt::Debug for InsertCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsertCommand").finish_non_exhaustive()
    }
}

impl Command for InsertCommand {
    fn name(&self) -> &'static str {
        "insert"
    }

    fn run(&self, args: &[String]) -> Result<Vec<Entry>, ProducerError> {
        let mut entries = Vec::new();
        for arg in args {
            let content = if let Some(remote) = RemotePath::parse(arg) {
                let staged = self.staging.fetch(&remote)?;
                read_text(&staged)?
            } else {
                read_text(Path::new(arg))?
            };
            entries.push(Entry::message(content));
        }
        Ok(entries)
    }
}

fn read_text(path: &Path) -> Result<String, ProducerError> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ProducerError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(ProducerError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{FakeRunner, TestTempDir};
    use std::sync::Arc;

    fn insert_with_runner(runner: FakeRunner) -> InsertCommand {
        let staging = Staging::new("scp", Arc::new(runner)).expect("staging dir");
        InsertCommand { staging }
    }

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn each_argument_becomes_one_message_in_order() {
        let fixture = TestTempDir::new("insert");
        let first = fixture.write_text("first.txt", "alpha\n");
        let second = fixture.write_text("second.txt", "beta");
        let command = insert_with_runner(FakeRunner::succeeding());

        let entries = command
            .run(&toks(&[
                &first.display().to_string(),
                &second.display().to_string(),
            ]))
            .unwrap();
        assert_eq!(
            entries,
            vec![Entry::message("alpha\n"), Entry::message("beta")]
        );
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let fixture = TestTempDir::new("insert");
        let missing = fixture.child("gone.txt");
        let command = insert_with_runner(FakeRunner::succeeding());

        let err = command
            .run(&toks(&[&missing.display().to_string()]))
            .unwrap_err();
        assert!(matches!(err, ProducerError::FileNotFound(p) if p == missing));
    }

    #[test]
    fn remote_argument_inlines_the_staged_content() {
        let command = insert_with_runner(FakeRunner::staging("remote text"));
        let entries = command.run(&toks(&["host:/etc/motd"])).unwrap();
        assert_eq!(entries, vec![Entry::message("remote text")]);
    }
}
