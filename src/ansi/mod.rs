// src/ansi/mod.rs

//! # SGR Escape Sequence Tokenizer
//!
//! Turns decoded terminal output into plain-text runs separated by classified
//! CSI commands.
//!
//! ## Pipeline
//!
//! ```text
//! chunk ──► StreamBuffer ──► tokenize ──► [Segment { command, text }, ...]
//!              ▲                │
//!              └── remainder ◄──┘
//! ```
//!
//! 1. The [`StreamBuffer`] prepends whatever was left over from the previous
//!    chunk.
//! 2. The input is split on `ESC [`. The first piece is plain text; every other
//!    piece is an escape body followed by plain text.
//! 3. Each body is scanned:
//!    - final byte `m` without a private marker → [`Command::Sgr`]
//!    - any other final byte → [`Command::Unsupported`] (the sequence is
//!      dropped, the trailing text kept)
//!    - a byte that fits no grammar position → [`Command::Malformed`] (the
//!      introducer is dropped, the body kept as text)
//!    - end of input before a final byte → held back as the remainder
//! 4. A lone ESC at the very end is also held back, since the `[` may arrive
//!    with the next chunk.
//!
//! ## Example: Fragmented Input
//!
//! ```
//! use sgr_render::ansi::{Command, StreamBuffer};
//!
//! let mut stream = StreamBuffer::new();
//!
//! let first = stream.feed("\x1b[3");
//! assert_eq!(first.len(), 1);
//! assert_eq!(first[0].text, "");
//! assert_eq!(stream.pending(), "\x1b[3");
//!
//! let second = stream.feed("1mred");
//! assert_eq!(second[1].command, Some(Command::Sgr(vec![Some(31)])));
//! assert_eq!(second[1].text, "red");
//! assert!(!stream.has_pending());
//! ```
//!
//! Bytes are assumed already decoded; nothing here deals with UTF-8.

pub mod commands;
mod lexer;
mod stream;

pub use commands::{parse_sgr_params, Command, SgrParam};
pub use lexer::{scan_escape_body, tokenize, EscapeBody, Segment, CSI_INTRODUCER, ESC};
pub use stream::{feed, StreamBuffer, MAX_PENDING_LEN};
