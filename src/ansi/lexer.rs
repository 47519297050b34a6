// src/ansi/lexer.rs

//! CSI tokenizer.
//!
//! Splits decoded text on the `ESC [` introducer and classifies the body that
//! follows each introducer. The grammar of one body is
//!
//! ```text
//! [private-marker] [0-9;]* [intermediate] final-byte rest...
//!   ! or 0x3C-0x3F          0x20-0x2C     0x40-0x7E
//! ```
//!
//! Scanning a body has three explicit outcomes: a complete command, a
//! malformed body, or an incomplete one that ran out of input before its final
//! byte. Only the last body of the input may be incomplete; it is handed back
//! as the remainder so the caller can prepend it to the next chunk.

use super::commands::{parse_sgr_params, Command, SGR_FINAL_BYTE};
use log::{debug, trace};

/// The two-character Control Sequence Introducer.
pub const CSI_INTRODUCER: &str = "\x1b[";
pub const ESC: char = '\x1b';

/// A plain-text run, optionally preceded by the command that introduced it.
///
/// The first segment of a tokenized input never carries a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub command: Option<Command>,
    pub text: String,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Segment {
            command: None,
            text: text.to_owned(),
        }
    }
}

/// Outcome of scanning the text after one CSI introducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeBody<'a> {
    /// A command was recognized; `rest` is the plain text after it.
    Complete { command: Command, rest: &'a str },
    /// Input ended before the final byte.
    Incomplete,
}

#[inline]
fn is_private_marker(byte: u8) -> bool {
    byte == b'!' || (0x3C..=0x3F).contains(&byte)
}

#[inline]
fn is_param_byte(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b';'
}

#[inline]
fn is_intermediate(byte: u8) -> bool {
    (0x20..=0x2C).contains(&byte)
}

#[inline]
fn is_final_byte(byte: u8) -> bool {
    (0x40..=0x7E).contains(&byte)
}

/// Scans one escape body (the text between an introducer and the next one).
pub fn scan_escape_body(body: &str) -> EscapeBody<'_> {
    let bytes = body.as_bytes();
    let mut pos = 0;

    let private_marker = match bytes.first() {
        None => return EscapeBody::Incomplete,
        Some(&b) if is_private_marker(b) => {
            pos += 1;
            Some(b as char)
        }
        Some(_) => None,
    };

    let params_start = pos;
    while bytes.get(pos).is_some_and(|&b| is_param_byte(b)) {
        pos += 1;
    }
    let params_end = pos;

    let intermediate = match bytes.get(pos) {
        None => return EscapeBody::Incomplete,
        Some(&b) if is_intermediate(b) => {
            pos += 1;
            Some(b as char)
        }
        Some(_) => None,
    };

    let final_byte = match bytes.get(pos) {
        None => return EscapeBody::Incomplete,
        Some(&b) if is_final_byte(b) => b,
        Some(&b) => {
            debug!("Malformed CSI body: unexpected byte 0x{:02X} at offset {}", b, pos);
            return EscapeBody::Complete {
                command: Command::Malformed,
                rest: body,
            };
        }
    };

    // Every byte up to and including the final byte is ASCII, so `pos + 1`
    // is a char boundary.
    let rest = &body[pos + 1..];

    let command = if private_marker.is_none() && final_byte == SGR_FINAL_BYTE {
        Command::Sgr(parse_sgr_params(&body[params_start..params_end]))
    } else {
        let command = Command::Unsupported {
            private_marker,
            intermediate,
            final_byte: final_byte as char,
        };
        trace!("Skipping unsupported sequence {}", command);
        command
    };

    EscapeBody::Complete { command, rest }
}

/// Splits `input` into segments and the unconsumed tail.
///
/// The tail is either an incomplete escape sequence (introducer included), a
/// lone trailing ESC, or empty.
pub fn tokenize(input: &str) -> (Vec<Segment>, String) {
    let mut bodies = input.split(CSI_INTRODUCER).peekable();
    let mut segments = vec![Segment::plain(bodies.next().unwrap_or(""))];
    let mut remainder = String::new();

    while let Some(body) = bodies.next() {
        let is_last = bodies.peek().is_none();
        match scan_escape_body(body) {
            EscapeBody::Complete { command, rest } => segments.push(Segment {
                command: Some(command),
                text: rest.to_owned(),
            }),
            EscapeBody::Incomplete if is_last => {
                trace!("Buffering incomplete sequence ({} bytes)", body.len() + 2);
                remainder.push_str(CSI_INTRODUCER);
                remainder.push_str(body);
            }
            EscapeBody::Incomplete => {
                // Cut off by the next introducer; it can never complete.
                debug!("CSI body {:?} interrupted by another introducer", body);
                segments.push(Segment {
                    command: Some(Command::Malformed),
                    text: body.to_owned(),
                });
            }
        }
    }

    if remainder.is_empty() {
        if let Some(last) = segments.last_mut() {
            if last.text.ends_with(ESC) {
                trace!("Input ends with a lone ESC, buffering it");
                last.text.pop();
                remainder.push(ESC);
            }
        }
    }

    (segments, remainder)
}
