// src/ansi/stream.rs

//! Carry-over buffer for escape sequences split across input chunks.

use super::lexer::{tokenize, Segment};
use log::{debug, trace};
use std::mem;

/// Longest partial sequence held between calls. A longer tail is released as
/// literal text.
pub const MAX_PENDING_LEN: usize = 4096;

/// Tokenizes `previous + text` and returns the segments together with the
/// new remainder to carry into the next call.
pub fn feed(previous: &str, text: &str) -> (Vec<Segment>, String) {
    let mut input = String::with_capacity(previous.len() + text.len());
    input.push_str(previous);
    input.push_str(text);
    tokenize(&input)
}

/// Owns the unconsumed tail of the previous chunk.
///
/// Feeding chunks of any size through one `StreamBuffer` yields the same text
/// runs and commands as feeding their concatenation at once, as long as no
/// single unterminated sequence grows past [`MAX_PENDING_LEN`] bytes. Such a
/// tail is emitted as a plain segment and the buffer starts over.
#[derive(Debug, Clone, Default)]
pub struct StreamBuffer {
    pending: String,
}

impl StreamBuffer {
    pub fn new() -> Self {
        StreamBuffer::default()
    }

    /// Prepends the pending tail to `text`, tokenizes, and keeps the new tail.
    pub fn feed(&mut self, text: &str) -> Vec<Segment> {
        let previous = mem::take(&mut self.pending);
        let (mut segments, remainder) = feed(&previous, text);
        if remainder.len() > MAX_PENDING_LEN {
            debug!(
                "Unterminated sequence exceeds {} bytes, releasing it as text",
                MAX_PENDING_LEN
            );
            segments.push(Segment {
                command: None,
                text: remainder,
            });
            return segments;
        }
        if !remainder.is_empty() {
            trace!("Holding {} bytes for the next chunk", remainder.len());
        }
        self.pending = remainder;
        segments
    }

    /// The buffered partial sequence, if any.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Removes and returns the buffered partial sequence.
    pub fn take_pending(&mut self) -> String {
        mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
