//! Shared test fixtures for segmenter/producer/renderer test modules.
//!
//! Keeping tiny but reusable helpers here prevents each test module from
//! rebuilding ad-hoc temp-dir and collaborator-fake code.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ProducerError;
use crate::process::{ExecOutput, ProcessRunner};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
///
/// This helper is intentionally simple and std-only so unit tests can use it
/// without routing through the crate's own staging machinery.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("missive-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Scripted [`ProcessRunner`] that records invocations instead of spawning.
///
/// When `stage_content` is set, each call also writes that text to the last
/// argument, mimicking a secure-copy collaborator's destination file.
pub struct FakeRunner {
    exit_code: i32,
    stdout: String,
    stderr: String,
    stage_content: Option<String>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeRunner {
    /// A runner whose commands exit zero with empty output.
    pub fn succeeding() -> Self {
        Self::with_output(0, "", "")
    }

    /// A runner whose commands fail with the given stderr.
    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self::with_output(exit_code, "", stderr)
    }

    /// A runner with fully scripted output.
    pub fn with_output(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            stage_content: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Also write `content` to the destination (last) argument of each call.
    pub fn staging(content: &str) -> Self {
        let mut runner = Self::succeeding();
        runner.stage_content = Some(content.to_string());
        runner
    }

    /// All `(program, args)` invocations so far.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().expect("fake runner lock").clone()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ExecOutput> {
        self.calls
            .lock()
            .expect("fake runner lock")
            .push((program.to_string(), args.to_vec()));

        if let (Some(content), Some(dest)) = (self.stage_content.as_deref(), args.last()) {
            fs::write(dest, content)?;
        }

        Ok(ExecOutput {
            exit_code: self.exit_code,
            stdout: self.stdout.clone(),
            stderr: self.stderr.clone(),
        })
    }
}

/// In-memory clipboard fake.
pub struct FakeClipboard {
    text: Mutex<String>,
}

impl FakeClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Mutex::new(text.to_string()),
        }
    }

    pub fn text(&self) -> String {
        self.text.lock().expect("fake clipboard lock").clone()
    }
}

impl crate::clipboard::ClipboardAccess for FakeClipboard {
    fn read_text(&self) -> Result<String, ProducerError> {
        Ok(self.text())
    }

    fn write_text(&self, text: &str) -> Result<(), ProducerError> {
        *self.text.lock().expect("fake clipboard lock") = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn fake_runner_records_calls_and_stages_content() {
        let fixture = TestTempDir::new("runner");
        let dest = fixture.child("staged.txt");
        let runner = FakeRunner::staging("remote bytes");

        let out = runner
            .run("scp", &["host:/x".to_string(), dest.display().to_string()])
            .expect("fake run");
        assert!(out.success());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "remote bytes");
        assert_eq!(runner.calls().len(), 1);
    }
}
