#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! The `Cell` is the fundamental unit of the terminal grid: one Unicode
//! scalar plus a foreground color and style flags. The portfolio renders on
//! an implicit black background, so cells carry no background channel.

use bitflags::bitflags;

/// A packed 24-bit RGB color.
///
/// Stored as `0x00RRGGBB` for cheap equality and copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Multiply every channel by `factor` (clamped to `[0.0, 1.0]`).
    ///
    /// Used by the backdrop trail fade; repeated application converges
    /// to black and never wraps.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self::new(
            (self.r() as f32 * f) as u8,
            (self.g() as f32 * f) as u8,
            (self.b() as f32 * f) as u8,
        )
    }

    /// True if all channels are zero.
    #[inline]
    pub const fn is_black(self) -> bool {
        self.0 == 0
    }
}

bitflags! {
    /// Style flags applied to a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD = 1 << 0;
        /// Dim / decreased intensity.
        const DIM = 1 << 1;
        /// Underline.
        const UNDERLINE = 1 << 2;
        /// Reverse video (swap fg/bg).
        const REVERSE = 1 << 3;
    }
}

/// One terminal grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character to display.
    pub ch: char,
    /// Foreground color.
    pub fg: Rgb,
    /// Style flags.
    pub attrs: StyleFlags,
}

impl Cell {
    /// An empty (space, black) cell.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: Rgb::BLACK,
        attrs: StyleFlags::empty(),
    };

    /// Create a cell from a character with default style.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            fg: Rgb::WHITE,
            attrs: StyleFlags::empty(),
        }
    }

    /// Builder: set the foreground color.
    #[inline]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Builder: set the style flags.
    #[inline]
    pub const fn with_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// True for cells that display nothing over a black background.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.ch == ' ' && !self.attrs.contains(StyleFlags::REVERSE)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}
