//! Builtin subcommands and their registry.
//!
//! Each subcommand is a [`Command`] trait object owning the collaborators it
//! needs. The registry is built once at startup and never mutated; candidate
//! names resolve by unambiguous prefix, so `at` runs `attach` and `s` runs
//! `say` for the builtin set.

pub mod attach;
pub mod exec;
pub mod insert;
pub mod paste;
pub mod say;

use std::sync::Arc;

use crate::clipboard::ClipboardAccess;
use crate::entry::Entry;
use crate::error::{DispatchError, ProducerError};
use crate::process::ProcessRunner;
use crate::segment::Segment;
use crate::staging::Staging;

pub use attach::AttachCommand;
pub use exec::ExecCommand;
pub use insert::InsertCommand;
pub use paste::PasteCommand;
pub use say::SayCommand;

// ---------------------------------------------------------------------------
// Command trait
// ---------------------------------------------------------------------------

/// One subcommand: turns its argument tokens into document entries.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Full registered name; candidates match this by prefix.
    fn name(&self) -> &'static str;

    /// Produce entries from the segment's arguments, in yield order.
    fn run(&self, args: &[String]) -> Result<Vec<Entry>, ProducerError>;
}

// ---------------------------------------------------------------------------
// Command registry
// ---------------------------------------------------------------------------

/// Fixed, ordered set of available subcommands.
///
/// Registration order is the ambiguity-reporting order; dispatch correctness
/// does not depend on it.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a subcommand.
    pub fn register(&mut self, command: impl Command + 'static) {
        self.commands.push(Box::new(command));
    }

    /// The builtin subcommand set wired to its collaborators.
    pub fn builtin(
        staging: Staging,
        runner: Arc<dyn ProcessRunner>,
        clipboard: Arc<dyn ClipboardAccess>,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(SayCommand);
        registry.register(AttachCommand {
            staging: staging.clone(),
        });
        registry.register(InsertCommand { staging });
        registry.register(ExecCommand { runner });
        registry.register(PasteCommand { clipboard });
        registry
    }

    /// Resolve a possibly-abbreviated candidate to exactly one subcommand.
    pub fn resolve(&self, candidate: &str) -> Result<&dyn Command, DispatchError> {
        let mut matches = self
            .commands
            .iter()
            .filter(|command| command.name().starts_with(candidate));

        let Some(first) = matches.next() else {
            return Err(DispatchError::Unknown(candidate.to_string()));
        };
        if matches.next().is_some() {
            return Err(DispatchError::Ambiguous(candidate.to_string()));
        }
        Ok(first.as_ref())
    }

    /// Dispatch one segment: resolve its name, run the producer on the rest.
    pub fn dispatch(&self, segment: &Segment) -> Result<Vec<Entry>, DispatchError> {
        let Some(candidate) = segment.name() else {
            return Err(DispatchError::NoSubcommandProvided);
        };
        let command = self.resolve(candidate)?;
        command.run(segment.args()).map_err(DispatchError::from)
    }

    /// True if no subcommands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
