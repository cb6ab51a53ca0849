//! `exec` — run one command and capture its stdout.

use std::sync::Arc;

use super::Command;
use crate::entry::Entry;
use crate::error::ProducerError;
use crate::process::{failure_details, ProcessRunner};

/// Runs the argument tokens as one command line (`args[0]` is the program)
/// and emits the captured stdout as an output entry.
pub struct ExecCommand {
    pub runner: Arc<dyn ProcessRunner>,
}

impl std::fmt::Debug for ExecCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecCommand").finish_non_exhaustive()
    }
}

impl Command for ExecCommand {
    fn name(&self) -> &'static str {
        "exec"
    }

    fn run(&self, args: &[String]) -> Result<Vec<Entry>, ProducerError> {
        let Some((program, rest)) = args.split_first() else {
            return Err(ProducerError::CommandFailed("no command given".into()));
        };

        let output = self
            .runner
            .run(program, rest)
            .map_err(|e| ProducerError::CommandFailed(format!("{program}: {e}")))?;
        if !output.success() {
            return Err(ProducerError::CommandFailed(failure_details(&output)));
        }
        Ok(vec![Entry::output(output.stdout)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::FakeRunner;

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn captured_stdout_becomes_one_output_entry() {
        let runner = Arc::new(FakeRunner::with_output(0, "hi\n", ""));
        let command = ExecCommand {
            runner: runner.clone(),
        };

        let entries = command.run(&toks(&["echo", "hi"])).unwrap();
        assert_eq!(entries, vec![Entry::output("hi\n")]);

        let calls = runner.calls();
        assert_eq!(calls, vec![("echo".to_string(), toks(&["hi"]))]);
    }

    #[test]
    fn nonzero_exit_is_command_failed_with_stderr_detail() {
        let command = ExecCommand {
            runner: Arc::new(FakeRunner::failing(2, "ls: no such file\n")),
        };
        let err = command.run(&toks(&["ls", "missing"])).unwrap_err();
        match err {
            ProducerError::CommandFailed(details) => assert_eq!(details, "ls: no such file"),
            other => panic!("expected command failure, got {other:?}"),
        }
    }

    #[test]
    fn empty_command_line_is_rejected() {
        let command = ExecCommand {
            runner: Arc::new(FakeRunner::succeeding()),
        };
        let err = command.run(&[]).unwrap_err();
        assert!(matches!(err, ProducerError::CommandFailed(msg) if msg == "no command given"));
    }
}
