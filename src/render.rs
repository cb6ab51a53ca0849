//! Terminal output renderer for status and error messages.
//!
//! The markdown document itself goes to its destination untouched; everything
//! the user reads about the run (errors, warnings, confirmations) goes to
//! stderr through this renderer.

use crossterm::style::{Color, Stylize};

const LABEL_ERROR: &str = "error:";
const LABEL_WARNING: &str = "warning:";
const INDENT_1: &str = "  ";

/// Handles stderr status formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print an error line.
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }

    /// Print a warning line.
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    /// Print a small section header in status-style output.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!("{} {}", "•".with(Color::Cyan), title.bold());
        } else {
            eprintln!("{title}:");
        }
    }

    /// Print one key/value field row.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{INDENT_1}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value
            );
        } else {
            eprintln!("{INDENT_1}{key}: {value}");
        }
    }
}
