// src/rendition.rs

//! The current graphic rendition and the SGR state machine that updates it.

use crate::ansi::commands::{
    SgrParam, SGR_BG_BLACK, SGR_BG_BRIGHT_BLACK, SGR_BG_BRIGHT_WHITE, SGR_BG_DEFAULT,
    SGR_BG_WHITE, SGR_BOLD, SGR_EXTENDED_COLOR_BG, SGR_EXTENDED_COLOR_FG,
    SGR_EXT_MODE_256_INDEX, SGR_EXT_MODE_RGB_TRUECOLOR, SGR_FG_BLACK, SGR_FG_BRIGHT_BLACK,
    SGR_FG_BRIGHT_WHITE, SGR_FG_DEFAULT, SGR_FG_WHITE, SGR_NORMAL_INTENSITY, SGR_RESET,
};
use crate::color::{basic_color, indexed_color, PaletteEntry};
use log::{debug, trace};
use std::slice::Iter;

/// Bright flag plus foreground and background colors.
///
/// `None` means "the terminal's default color". Colors are always fully
/// resolved; an extended color sequence cut short never leaves a partial value
/// behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorState {
    pub bright: bool,
    pub fg: Option<PaletteEntry>,
    pub bg: Option<PaletteEntry>,
}

/// Which color an extended (38/48) sequence targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Foreground,
    Background,
}

impl ColorState {
    pub fn new() -> Self {
        ColorState::default()
    }

    /// True when nothing differs from the initial state.
    pub fn is_default(&self) -> bool {
        *self == ColorState::default()
    }

    /// Applies one SGR parameter list, left to right, and returns the result.
    ///
    /// Only the cumulative state after the whole list matters to the caller.
    pub fn apply(mut self, params: &[SgrParam]) -> Self {
        let mut iter = params.iter();
        while let Some(param) = iter.next() {
            let Some(code) = *param else {
                // Empty or unparsable field.
                self = ColorState::default();
                continue;
            };
            match code {
                SGR_RESET => self = ColorState::default(),
                SGR_BOLD => self.bright = true,
                SGR_NORMAL_INTENSITY => self.bright = false,
                SGR_FG_DEFAULT => self.fg = None,
                SGR_BG_DEFAULT => self.bg = None,
                SGR_FG_BLACK..=SGR_FG_WHITE => {
                    self.fg = basic_color(code - SGR_FG_BLACK, self.bright);
                }
                SGR_FG_BRIGHT_BLACK..=SGR_FG_BRIGHT_WHITE => {
                    self.fg = basic_color(code - SGR_FG_BRIGHT_BLACK, true);
                }
                SGR_BG_BLACK..=SGR_BG_WHITE => {
                    self.bg = basic_color(code - SGR_BG_BLACK, false);
                }
                SGR_BG_BRIGHT_BLACK..=SGR_BG_BRIGHT_WHITE => {
                    self.bg = basic_color(code - SGR_BG_BRIGHT_BLACK, true);
                }
                SGR_EXTENDED_COLOR_FG => self.apply_extended(Layer::Foreground, &mut iter),
                SGR_EXTENDED_COLOR_BG => self.apply_extended(Layer::Background, &mut iter),
                _ => debug!("Ignoring unsupported SGR code {}", code),
            }
        }
        self
    }

    fn apply_extended(&mut self, layer: Layer, iter: &mut Iter<'_, SgrParam>) {
        let Some(color) = parse_extended_color(iter) else {
            return;
        };
        match layer {
            Layer::Foreground => self.fg = Some(color),
            Layer::Background => self.bg = Some(color),
        }
    }
}

/// Consumes the operands of a 38/48 sequence and resolves the color.
///
/// Returns `None` when the mode is unknown, an operand is out of range, or the
/// list ends early. In the last case every remaining operand is consumed.
fn parse_extended_color(iter: &mut Iter<'_, SgrParam>) -> Option<PaletteEntry> {
    let mode = match iter.next() {
        Some(mode) => *mode,
        None => {
            trace!("Extended color without a mode");
            return None;
        }
    };
    match mode {
        Some(SGR_EXT_MODE_256_INDEX) => {
            let index = (*iter.next()?)?;
            let color = indexed_color(index);
            if color.is_none() {
                debug!("Palette index {} out of range", index);
            }
            color
        }
        Some(SGR_EXT_MODE_RGB_TRUECOLOR) => {
            let r = iter.next()?;
            let g = iter.next()?;
            let b = iter.next()?;
            match (channel(*r), channel(*g), channel(*b)) {
                (Some(r), Some(g), Some(b)) => Some(PaletteEntry::true_color(r, g, b)),
                _ => {
                    debug!("Truecolor component out of range: {:?} {:?} {:?}", r, g, b);
                    None
                }
            }
        }
        other => {
            debug!("Unknown extended color mode {:?}", other);
            None
        }
    }
}

fn channel(value: SgrParam) -> Option<u8> {
    value.and_then(|v| u8::try_from(v).ok())
}

/// A text run together with the rendition it was produced under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub bright: bool,
    pub fg: Option<PaletteEntry>,
    pub bg: Option<PaletteEntry>,
}

impl Fragment {
    pub fn new(text: impl Into<String>, state: ColorState) -> Self {
        Fragment {
            text: text.into(),
            bright: state.bright,
            fg: state.fg,
            bg: state.bg,
        }
    }

    /// The rendition this fragment was frozen with.
    pub fn state(&self) -> ColorState {
        ColorState {
            bright: self.bright,
            fg: self.fg,
            bg: self.bg,
        }
    }

    /// True when the fragment needs no styling at all.
    pub fn is_unstyled(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.bright
    }
}
