//! Synchronous "run command, capture output" seam.
//!
//! Both `exec` and the remote-copy staging path launch external processes.
//! They go through [`ProcessRunner`] so tests can substitute a fake without
//! spawning anything. Execution is blocking with no timeout: a hung child
//! hangs the run.

use std::io;
use std::process::{Command, Stdio};

use crate::textutil::truncate_with_suffix_by_bytes;

/// Maximum bytes of child stderr/stdout quoted in failure details.
const MAX_DETAIL_LEN: usize = 2000;

/// Captured result of one finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// True when the child exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Launches a program and waits for it, capturing stdout/stderr.
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args`; `Err` means the child never launched.
    fn run(&self, program: &str, args: &[String]) -> io::Result<ExecOutput>;
}

/// The real runner backed by `std::process`.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ExecOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(ExecOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Summarize a failed child for error messages: stderr when present, stdout
/// otherwise, the bare exit code as a last resort.
pub fn failure_details(output: &ExecOutput) -> String {
    let mut details = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    if details.is_empty() {
        details = format!("command exited with {}", output.exit_code);
    }
    truncate_with_suffix_by_bytes(&details, MAX_DETAIL_LEN, "...[truncated]")
}
