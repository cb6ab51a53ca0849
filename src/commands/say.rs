//! `say` — emit literal words as one message paragraph.

use super::Command;
use crate::entry::Entry;
use crate::error::ProducerError;

/// Joins its arguments with single spaces into one message entry.
#[derive(Debug)]
pub struct SayCommand;

impl Command for SayCommand {
    fn name(&self) -> &'static str {
        "say"
    }

    fn run(&self, args: &[String]) -> Result<Vec<Entry>, ProducerError> {
        Ok(vec![Entry::message(args.join(" "))])
    }
}
