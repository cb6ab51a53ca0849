//! `paste` — emit the current clipboard text as a message.

use std::sync::Arc;

use super::Command;
use crate::clipboard::ClipboardAccess;
use crate::entry::Entry;
use crate::error::ProducerError;

/// Reads the clipboard once and emits its text verbatim, empty included.
pub struct PasteCommand {
    pub clipboard: Arc<dyn ClipboardAccess>,
}

impl std::fmt::Debug for PasteCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasteCommand").finish_non_exhaustive()
    }
}

impl Command for PasteCommand {
    fn name(&self) -> &'static str {
        "paste"
    }

    fn run(&self, _args: &[String]) -> Result<Vec<Entry>, ProducerError> {
        Ok(vec![Entry::message(self.clipboard.read_text()?)])
    }
}
