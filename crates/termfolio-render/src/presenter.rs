#![forbid(unsafe_code)]

//! State-tracked ANSI presenter.
//!
//! Transforms buffer diffs into minimal terminal output by tracking the
//! current style and cursor position and only emitting the escape
//! sequences that are actually needed: one cursor move per change run,
//! style changes only when a cell's style differs from the last emitted
//! one (reset + apply strategy), and an SGR reset at frame end so the
//! terminal is left in a clean state.
//!
//! Frames are wrapped in synchronized-output markers (`CSI ? 2026 h/l`);
//! terminals without the extension ignore them.

use std::io::{self, BufWriter, Write};

use crate::buffer::Buffer;
use crate::cell::{Cell, Rgb, StyleFlags};
use crate::diff::BufferDiff;
use unicode_width::UnicodeWidthChar;

/// Size of the internal write buffer (64KB).
const BUFFER_CAPACITY: usize = 64 * 1024;

/// Cached style state for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellStyle {
    fg: Rgb,
    attrs: StyleFlags,
}

impl CellStyle {
    fn from_cell(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            attrs: cell.attrs,
        }
    }
}

/// State-tracked ANSI presenter over any writer.
pub struct Presenter<W: Write> {
    /// Buffered writer for efficient output.
    writer: BufWriter<W>,
    /// Current style state (None = unknown/reset).
    current_style: Option<CellStyle>,
    /// Current cursor position (0-indexed). None = unknown.
    cursor: Option<(u16, u16)>,
}

impl<W: Write> Presenter<W> {
    /// Create a new presenter with the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            current_style: None,
            cursor: None,
        }
    }

    /// Present a frame using the given buffer and diff.
    ///
    /// Emits the changed runs, resets style at the end, and flushes.
    pub fn present(&mut self, buffer: &Buffer, diff: &BufferDiff) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "present",
            width = buffer.width(),
            height = buffer.height(),
            changes = diff.len()
        )
        .entered();

        if diff.is_empty() {
            return Ok(());
        }

        self.writer.write_all(b"\x1b[?2026h")?;

        for run in diff.runs() {
            self.move_cursor_to(run.x0, run.y)?;
            for x in run.x0..=run.x1 {
                if let Some(cell) = buffer.get(x, run.y) {
                    self.emit_cell(cell)?;
                }
            }
        }

        // Clean style state for whatever writes next
        self.writer.write_all(b"\x1b[0m")?;
        self.current_style = None;

        self.writer.write_all(b"\x1b[?2026l")?;
        self.writer.flush()
    }

    /// Clear the whole screen and forget tracked state.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\x1b[2J\x1b[H")?;
        self.current_style = None;
        self.cursor = Some((0, 0));
        self.writer.flush()
    }

    /// Move the cursor, skipping the escape if it is already there.
    fn move_cursor_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        if self.cursor == Some((x, y)) {
            return Ok(());
        }
        // Terminal coordinates are 1-indexed
        write!(self.writer, "\x1b[{};{}H", y + 1, x + 1)?;
        self.cursor = Some((x, y));
        Ok(())
    }

    /// Emit a single cell: style change (if any) then content.
    fn emit_cell(&mut self, cell: &Cell) -> io::Result<()> {
        self.emit_style_changes(cell)?;

        let mut utf8 = [0u8; 4];
        self.writer.write_all(cell.ch.encode_utf8(&mut utf8).as_bytes())?;

        // Character output advances the cursor by its display width
        if let Some((x, y)) = self.cursor {
            let w = cell.ch.width().unwrap_or(0) as u16;
            self.cursor = Some((x.saturating_add(w), y));
        }
        Ok(())
    }

    /// Emit style changes if the cell style differs from the current one.
    ///
    /// Reset + apply: simpler and more robust than incremental updates,
    /// and the style cache keeps it off the hot path for solid runs.
    fn emit_style_changes(&mut self, cell: &Cell) -> io::Result<()> {
        let new_style = CellStyle::from_cell(cell);
        if self.current_style == Some(new_style) {
            return Ok(());
        }

        self.writer.write_all(b"\x1b[0m")?;

        if !new_style.fg.is_black() {
            write!(
                self.writer,
                "\x1b[38;2;{};{};{}m",
                new_style.fg.r(),
                new_style.fg.g(),
                new_style.fg.b()
            )?;
        }

        if new_style.attrs.contains(StyleFlags::BOLD) {
            self.writer.write_all(b"\x1b[1m")?;
        }
        if new_style.attrs.contains(StyleFlags::DIM) {
            self.writer.write_all(b"\x1b[2m")?;
        }
        if new_style.attrs.contains(StyleFlags::UNDERLINE) {
            self.writer.write_all(b"\x1b[4m")?;
        }
        if new_style.attrs.contains(StyleFlags::REVERSE) {
            self.writer.write_all(b"\x1b[7m")?;
        }

        self.current_style = Some(new_style);
        Ok(())
    }

    /// Flush buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present_to_string(old: &Buffer, new: &Buffer) -> String {
        let diff = BufferDiff::compute(old, new);
        let mut presenter = Presenter::new(Vec::new());
        presenter.present(new, &diff).unwrap();
        presenter.flush().unwrap();
        String::from_utf8(presenter.writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn empty_diff_emits_nothing() {
        let a = Buffer::new(4, 2);
        let b = Buffer::new(4, 2);
        assert_eq!(present_to_string(&a, &b), "");
    }

    #[test]
    fn single_change_moves_once_and_prints() {
        let old = Buffer::new(10, 3);
        let mut new = Buffer::new(10, 3);
        new.set(4, 1, Cell::from_char('A').with_fg(Rgb::new(0, 255, 0)));

        let out = present_to_string(&old, &new);
        // 1-indexed cursor move to row 2 col 5
        assert!(out.contains("\x1b[2;5H"));
        assert!(out.contains("\x1b[38;2;0;255;0m"));
        assert!(out.contains('A'));
        assert!(out.ends_with("\x1b[?2026l"));
    }

    #[test]
    fn run_of_same_style_emits_style_once() {
        let old = Buffer::new(10, 1);
        let mut new = Buffer::new(10, 1);
        for x in 0..5 {
            new.set(x, 0, Cell::from_char('x').with_fg(Rgb::new(1, 2, 3)));
        }
        let out = present_to_string(&old, &new);
        assert_eq!(out.matches("\x1b[38;2;1;2;3m").count(), 1);
        // One cursor move for the whole run
        assert_eq!(out.matches("\x1b[1;1H").count(), 1);
    }

    #[test]
    fn attrs_emit_expected_sgr() {
        let old = Buffer::new(4, 1);
        let mut new = Buffer::new(4, 1);
        new.set(
            0,
            0,
            Cell::from_char('g')
                .with_fg(Rgb::new(0, 255, 255))
                .with_attrs(StyleFlags::BOLD),
        );
        new.set(
            1,
            0,
            Cell::from_char('g')
                .with_fg(Rgb::new(0, 255, 0))
                .with_attrs(StyleFlags::DIM),
        );
        let out = present_to_string(&old, &new);
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("\x1b[2m"));
    }

    #[test]
    fn ends_with_reset_before_sync_close() {
        let old = Buffer::new(2, 1);
        let mut new = Buffer::new(2, 1);
        new.set(0, 0, Cell::from_char('z').with_fg(Rgb::WHITE));
        let out = present_to_string(&old, &new);
        assert!(out.contains("\x1b[0m\x1b[?2026l"));
    }
}
