// src/ansi/commands.rs

//! Defines the `Command` enum produced by the tokenizer and the SGR
//! parameter constants consumed by the rendition state machine.

use std::fmt;

// --- SGR Parameter Constants ---

pub const SGR_RESET: u16 = 0;
pub const SGR_BOLD: u16 = 1;
pub const SGR_NORMAL_INTENSITY: u16 = 22;

// Foreground Colors (30-37)
pub const SGR_FG_BLACK: u16 = 30;
pub const SGR_FG_WHITE: u16 = 37;
pub const SGR_FG_DEFAULT: u16 = 39;

// Background Colors (40-47)
pub const SGR_BG_BLACK: u16 = 40;
pub const SGR_BG_WHITE: u16 = 47;
pub const SGR_BG_DEFAULT: u16 = 49;

// Bright Foreground Colors (90-97)
pub const SGR_FG_BRIGHT_BLACK: u16 = 90;
pub const SGR_FG_BRIGHT_WHITE: u16 = 97;

// Bright Background Colors (100-107)
pub const SGR_BG_BRIGHT_BLACK: u16 = 100;
pub const SGR_BG_BRIGHT_WHITE: u16 = 107;

// Extended Colors (introduced by '38' for FG, '48' for BG)
pub const SGR_EXTENDED_COLOR_FG: u16 = 38;
pub const SGR_EXTENDED_COLOR_BG: u16 = 48;
/// SGR sub-parameter: the next parameter is a 256-color palette index.
pub const SGR_EXT_MODE_256_INDEX: u16 = 5;
/// SGR sub-parameter: the next three parameters are R, G, B.
pub const SGR_EXT_MODE_RGB_TRUECOLOR: u16 = 2;

/// The SGR final byte.
pub const SGR_FINAL_BYTE: u8 = b'm';

/// A single SGR parameter.
///
/// `None` stands for an empty or unparsable field (`ESC[;31m` has one), which
/// the state machine treats as a reset. Numbers saturate at `u16::MAX`.
pub type SgrParam = Option<u16>;

/// Parses the digit/semicolon parameter string of an SGR sequence.
///
/// An empty string yields a single empty parameter, so `ESC[m` behaves like
/// `ESC[0m`.
pub fn parse_sgr_params(raw: &str) -> Vec<SgrParam> {
    raw.split(';').map(parse_param).collect()
}

fn parse_param(field: &str) -> SgrParam {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = field.bytes().fold(0u16, |acc, b| {
        acc.saturating_mul(10).saturating_add(u16::from(b - b'0'))
    });
    Some(value)
}

/// One escape sequence, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `ESC [ params m`: a color/attribute change.
    Sgr(Vec<SgrParam>),
    /// A complete CSI sequence that is not SGR (cursor movement, erase,
    /// private modes). Carries no state change; kept for logging.
    Unsupported {
        private_marker: Option<char>,
        intermediate: Option<char>,
        final_byte: char,
    },
    /// The introducer was followed by bytes that fit no CSI grammar position.
    /// The text after the introducer is kept verbatim.
    Malformed,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Sgr(params) => {
                write!(f, "SGR(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ";")?;
                    }
                    if let Some(value) = param {
                        write!(f, "{}", value)?;
                    }
                }
                write!(f, ")")
            }
            Command::Unsupported {
                private_marker,
                intermediate,
                final_byte,
            } => {
                write!(f, "CSI ")?;
                if let Some(marker) = private_marker {
                    write!(f, "{}", marker)?;
                }
                if let Some(intermediate) = intermediate {
                    write!(f, "{:?}", intermediate)?;
                }
                write!(f, "{}", final_byte)
            }
            Command::Malformed => write!(f, "malformed CSI"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_params() {
        assert_eq!(parse_sgr_params("1;31"), vec![Some(1), Some(31)]);
    }

    #[test]
    fn empty_string_is_one_empty_param() {
        assert_eq!(parse_sgr_params(""), vec![None]);
    }

    #[test]
    fn empty_fields_are_none() {
        assert_eq!(parse_sgr_params(";31;"), vec![None, Some(31), None]);
    }

    #[test]
    fn huge_numbers_saturate() {
        assert_eq!(parse_sgr_params("999999999"), vec![Some(u16::MAX)]);
    }

    #[test]
    fn leading_zeros_are_accepted() {
        assert_eq!(parse_sgr_params("005;0031"), vec![Some(5), Some(31)]);
    }

    #[test]
    fn display_formats_commands() {
        assert_eq!(
            Command::Sgr(vec![Some(1), None, Some(31)]).to_string(),
            "SGR(1;;31)"
        );
        assert_eq!(
            Command::Unsupported {
                private_marker: Some('?'),
                intermediate: None,
                final_byte: 'h'
            }
            .to_string(),
            "CSI ?h"
        );
    }
}
