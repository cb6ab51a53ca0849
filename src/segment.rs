//! Comma-rule token segmenter.
//!
//! The trailing command-line tokens form a flat list; commas split it into
//! discrete subcommand invocations. Only a trailing or standalone comma
//! closes a segment — a comma inside a token is literal.

use crate::error::SegmentError;

/// One subcommand invocation: the name token followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    tokens: Vec<String>,
}

impl Segment {
    /// Wrap an already-split token list as a segment.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// All tokens, name first.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The candidate subcommand name, if the segment has any tokens.
    pub fn name(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// The argument tokens after the name.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }
}

/// Split raw tokens into subcommand segments.
///
/// Rules, per token (whitespace-trimmed first):
/// - a token that is exactly `,` closes the current segment and is dropped;
/// - a token ending in `,` has the comma stripped, contributes its remainder
///   (when non-empty), and closes the current segment;
/// - any other token is appended to the current segment.
///
/// A non-empty accumulator is flushed after the last token, so the input may
/// end without a trailing comma. Closing an empty segment is a no-op, which
/// absorbs consecutive commas. An empty input yields zero segments; input
/// whose tokens dissolve entirely (e.g. a lone `","`) is an error.
pub fn segment(tokens: &[String]) -> Result<Vec<Segment>, SegmentError> {
    let mut segments = Vec::new();
    let mut accum: Vec<String> = Vec::new();

    for raw in tokens {
        let token = raw.trim();
        if let Some(stripped) = token.strip_suffix(',') {
            if !stripped.is_empty() {
                accum.push(stripped.to_string());
            }
            flush(&mut accum, &mut segments);
        } else {
            accum.push(token.to_string());
        }
    }
    flush(&mut accum, &mut segments);

    if segments.is_empty() && !tokens.is_empty() {
        return Err(SegmentError::MissingSubcommand);
    }
    Ok(segments)
}

fn flush(accum: &mut Vec<String>, segments: &mut Vec<Segment>) {
    if accum.is_empty() {
        return;
    }
    segments.push(Segment::new(std::mem::take(accum)));
}
