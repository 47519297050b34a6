// src/color.rs

//! Color model and the fixed palette tables.
//!
//! Every color the interpreter can hold is a [`PaletteEntry`]: an RGB triple
//! plus a [`ColorKind`] saying whether it is one of the 16 named ANSI colors
//! (which have CSS class names) or an anonymous RGB value. Indexed colors from
//! the 256-color palette resolve to entries at parse time, so nothing
//! downstream needs to know which SGR encoding produced a color.
//!
//! The tables are built once on first use and shared read-only.

use once_cell::sync::Lazy;

/// An 8-bit-per-channel RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The 16 standard ANSI colors (indices 0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl NamedColor {
    /// All named colors in palette order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];

    /// Converts a palette index (0-15) to a `NamedColor`.
    /// Returns `None` for anything outside the named range.
    pub fn from_index(idx: u8) -> Option<Self> {
        Self::ALL.get(idx as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn is_bright(self) -> bool {
        self.index() >= HUES_PER_ROW as u8
    }

    /// The CSS class stem for this color, e.g. `ansi-red` or `ansi-bright-red`.
    /// Renderers append `-fg` or `-bg`.
    pub fn class_name(self) -> &'static str {
        match self {
            NamedColor::Black => "ansi-black",
            NamedColor::Red => "ansi-red",
            NamedColor::Green => "ansi-green",
            NamedColor::Yellow => "ansi-yellow",
            NamedColor::Blue => "ansi-blue",
            NamedColor::Magenta => "ansi-magenta",
            NamedColor::Cyan => "ansi-cyan",
            NamedColor::White => "ansi-white",
            NamedColor::BrightBlack => "ansi-bright-black",
            NamedColor::BrightRed => "ansi-bright-red",
            NamedColor::BrightGreen => "ansi-bright-green",
            NamedColor::BrightYellow => "ansi-bright-yellow",
            NamedColor::BrightBlue => "ansi-bright-blue",
            NamedColor::BrightMagenta => "ansi-bright-magenta",
            NamedColor::BrightCyan => "ansi-bright-cyan",
            NamedColor::BrightWhite => "ansi-bright-white",
        }
    }

    /// The RGB value used when a named color is rendered inline.
    pub fn rgb(self) -> Rgb {
        match self {
            NamedColor::Black => Rgb(0, 0, 0),
            NamedColor::Red => Rgb(187, 0, 0),
            NamedColor::Green => Rgb(0, 187, 0),
            NamedColor::Yellow => Rgb(187, 187, 0),
            NamedColor::Blue => Rgb(0, 0, 187),
            NamedColor::Magenta => Rgb(187, 0, 187),
            NamedColor::Cyan => Rgb(0, 187, 187),
            NamedColor::White => Rgb(255, 255, 255),
            NamedColor::BrightBlack => Rgb(85, 85, 85),
            NamedColor::BrightRed => Rgb(255, 85, 85),
            NamedColor::BrightGreen => Rgb(0, 255, 0),
            NamedColor::BrightYellow => Rgb(255, 255, 85),
            NamedColor::BrightBlue => Rgb(85, 85, 255),
            NamedColor::BrightMagenta => Rgb(255, 85, 255),
            NamedColor::BrightCyan => Rgb(85, 255, 255),
            NamedColor::BrightWhite => Rgb(255, 255, 255),
        }
    }
}

/// Whether a palette entry carries a name (and so a CSS class) or is a bare RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    Named(NamedColor),
    TrueColor,
}

/// A fully resolved color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pub rgb: Rgb,
    pub kind: ColorKind,
}

impl PaletteEntry {
    pub fn named(color: NamedColor) -> Self {
        PaletteEntry {
            rgb: color.rgb(),
            kind: ColorKind::Named(color),
        }
    }

    pub fn true_color(r: u8, g: u8, b: u8) -> Self {
        PaletteEntry {
            rgb: Rgb(r, g, b),
            kind: ColorKind::TrueColor,
        }
    }

    /// The CSS class stem if this is a named color.
    pub fn class_name(&self) -> Option<&'static str> {
        match self.kind {
            ColorKind::Named(named) => Some(named.class_name()),
            ColorKind::TrueColor => None,
        }
    }
}

// Constants for 256-color palette indexing
const HUES_PER_ROW: usize = 8;
const COLOR_CUBE_OFFSET: usize = 16;
const COLOR_CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
const GRAYSCALE_OFFSET: usize = 232;
const GRAYSCALE_START: u8 = 8;
const GRAYSCALE_STEP: u8 = 10;
const GRAYSCALE_STEPS: usize = 24;

/// Index of the normal row in [`PALETTE_16`].
pub const NORMAL_ROW: usize = 0;
/// Index of the bright row in [`PALETTE_16`].
pub const BRIGHT_ROW: usize = 1;

/// Builds the 16 named colors as two rows (normal, bright) of eight hues.
pub fn build_palette_16() -> [[PaletteEntry; HUES_PER_ROW]; 2] {
    let mut rows = [[PaletteEntry::named(NamedColor::Black); HUES_PER_ROW]; 2];
    for named in NamedColor::ALL {
        let idx = named.index() as usize;
        rows[idx / HUES_PER_ROW][idx % HUES_PER_ROW] = PaletteEntry::named(named);
    }
    rows
}

/// Builds the xterm 256-color palette.
///
/// ```text
///   0..=15    named colors (normal row, then bright row)
///  16..=231   6x6x6 cube, index = 16 + 36r + 6g + b
/// 232..=255   grayscale ramp 8, 18, ..., 238
/// ```
pub fn build_palette_256() -> Vec<PaletteEntry> {
    let mut palette = Vec::with_capacity(256);

    palette.extend(NamedColor::ALL.iter().map(|&named| PaletteEntry::named(named)));
    debug_assert_eq!(palette.len(), COLOR_CUBE_OFFSET);

    for r in COLOR_CUBE_LEVELS {
        for g in COLOR_CUBE_LEVELS {
            for b in COLOR_CUBE_LEVELS {
                palette.push(PaletteEntry::true_color(r, g, b));
            }
        }
    }
    debug_assert_eq!(palette.len(), GRAYSCALE_OFFSET);

    let mut level = GRAYSCALE_START;
    for _ in 0..GRAYSCALE_STEPS {
        palette.push(PaletteEntry::true_color(level, level, level));
        level = level.saturating_add(GRAYSCALE_STEP);
    }

    palette
}

/// Named colors as `[row][hue]`, built once.
pub static PALETTE_16: Lazy<[[PaletteEntry; HUES_PER_ROW]; 2]> = Lazy::new(build_palette_16);

/// The 256-color palette, built once.
pub static PALETTE_256: Lazy<Vec<PaletteEntry>> = Lazy::new(build_palette_256);

/// Looks up one of the eight hues (0-7) in the normal or bright row.
/// Returns `None` if `hue` is out of range.
pub fn basic_color(hue: u16, bright: bool) -> Option<PaletteEntry> {
    let row = if bright { BRIGHT_ROW } else { NORMAL_ROW };
    PALETTE_16[row].get(hue as usize).copied()
}

/// Resolves a 256-color palette index. Returns `None` for indices above 255.
pub fn indexed_color(index: u16) -> Option<PaletteEntry> {
    PALETTE_256.get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_16_rows_hold_normal_then_bright() {
        let palette = build_palette_16();
        assert_eq!(palette[NORMAL_ROW][1], PaletteEntry::named(NamedColor::Red));
        assert_eq!(
            palette[BRIGHT_ROW][1],
            PaletteEntry::named(NamedColor::BrightRed)
        );
        assert_eq!(palette[BRIGHT_ROW][7].rgb, Rgb(255, 255, 255));
        for (row_idx, row) in palette.iter().enumerate() {
            for entry in row {
                match entry.kind {
                    ColorKind::Named(named) => {
                        assert_eq!(named.is_bright(), row_idx == BRIGHT_ROW)
                    }
                    ColorKind::TrueColor => panic!("palette 16 holds only named colors"),
                }
            }
        }
    }

    #[test]
    fn palette_256_has_256_entries() {
        assert_eq!(build_palette_256().len(), 256);
    }

    #[test]
    fn palette_256_aliases_named_colors() {
        for named in NamedColor::ALL {
            assert_eq!(
                indexed_color(named.index() as u16),
                Some(PaletteEntry::named(named))
            );
        }
    }

    #[test]
    fn palette_256_cube_mapping() {
        assert_eq!(indexed_color(16), Some(PaletteEntry::true_color(0, 0, 0)));
        assert_eq!(
            indexed_color(196),
            Some(PaletteEntry::true_color(255, 0, 0))
        );
        // 16 + 36*1 + 6*2 + 3
        assert_eq!(
            indexed_color(67),
            Some(PaletteEntry::true_color(95, 135, 175))
        );
        assert_eq!(
            indexed_color(231),
            Some(PaletteEntry::true_color(255, 255, 255))
        );
    }

    #[test]
    fn palette_256_section_boundaries() {
        let palette = build_palette_256();
        assert_eq!(
            palette[COLOR_CUBE_OFFSET - 1],
            PaletteEntry::named(NamedColor::BrightWhite)
        );
        assert_eq!(palette[COLOR_CUBE_OFFSET], PaletteEntry::true_color(0, 0, 0));
        assert_eq!(
            palette[GRAYSCALE_OFFSET - 1],
            PaletteEntry::true_color(255, 255, 255)
        );
        assert_eq!(palette[GRAYSCALE_OFFSET], PaletteEntry::true_color(8, 8, 8));
    }

    #[test]
    fn palette_256_grayscale_ramp() {
        assert_eq!(indexed_color(232), Some(PaletteEntry::true_color(8, 8, 8)));
        assert_eq!(
            indexed_color(244),
            Some(PaletteEntry::true_color(128, 128, 128))
        );
        assert_eq!(
            indexed_color(255),
            Some(PaletteEntry::true_color(238, 238, 238))
        );
    }

    #[test]
    fn out_of_range_lookups_return_none() {
        assert_eq!(indexed_color(256), None);
        assert_eq!(basic_color(8, false), None);
    }

    #[test]
    fn named_color_from_index_round_trips() {
        for named in NamedColor::ALL {
            assert_eq!(NamedColor::from_index(named.index()), Some(named));
        }
        assert_eq!(NamedColor::from_index(16), None);
    }

    #[test]
    fn only_named_entries_have_class_names() {
        assert_eq!(
            PaletteEntry::named(NamedColor::BrightCyan).class_name(),
            Some("ansi-bright-cyan")
        );
        assert_eq!(PaletteEntry::true_color(1, 2, 3).class_name(), None);
    }
}
