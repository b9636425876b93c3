#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is a 2D grid of [`Cell`]s in row-major order:
//! `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Out-of-bounds writes are ignored, never panic

use crate::cell::{Cell, Rgb, StyleFlags};
use termfolio_core::geometry::Rect;
use unicode_width::UnicodeWidthChar;

/// A 2D grid of terminal cells.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells are initialized to [`Cell::EMPTY`].
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bounding rect of the entire buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write a cell at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Fill a rectangular region with a cell, clipped to the buffer.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = self.bounds().intersection(&rect);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(i) = self.index(x, y) {
                    self.cells[i] = cell;
                }
            }
        }
    }

    /// Draw a string starting at (x, y), clipped at the right edge.
    ///
    /// Zero-width characters are skipped; wide characters advance the
    /// cursor by their display width. Returns the x position after the
    /// last drawn character.
    pub fn draw_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, attrs: StyleFlags) -> u16 {
        let mut cx = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if cx >= self.width || y >= self.height {
                break;
            }
            self.set(cx, y, Cell { ch, fg, attrs });
            cx = cx.saturating_add(w);
        }
        cx
    }

    /// Draw a horizontal rule across `rect.width` cells at (x, y).
    pub fn draw_rule(&mut self, x: u16, y: u16, width: u16, fg: Rgb) {
        for i in 0..width {
            self.set(
                x.saturating_add(i),
                y,
                Cell::from_char('─').with_fg(fg).with_attrs(StyleFlags::DIM),
            );
        }
    }

    /// Raw cell slice, row-major. Used by the diff scan.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
