#![forbid(unsafe_code)]

//! Diff computation between buffers.
//!
//! `BufferDiff` computes the set of changed cells between two buffers with
//! a row-major scan, then coalesces adjacent changes on the same row into
//! [`ChangeRun`]s so the presenter can emit one cursor move per run.

use crate::buffer::Buffer;

/// A contiguous run of changed cells on a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRun {
    /// Row index.
    pub y: u16,
    /// Start column (inclusive).
    pub x0: u16,
    /// End column (inclusive).
    pub x1: u16,
}

impl ChangeRun {
    /// Create a new change run.
    #[inline]
    pub const fn new(y: u16, x0: u16, x1: u16) -> Self {
        debug_assert!(x0 <= x1);
        Self { y, x0, x1 }
    }

    /// Number of cells in this run.
    #[inline]
    pub const fn len(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    /// Check if this run is empty (should never happen in practice).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x1 < self.x0
    }
}

/// The diff between two buffers.
#[derive(Debug, Clone, Default)]
pub struct BufferDiff {
    /// List of changed cell positions (x, y), row-major order.
    changes: Vec<(u16, u16)>,
}

impl BufferDiff {
    /// Compute the diff between two buffers.
    ///
    /// Both buffers must have the same dimensions.
    pub fn compute(old: &Buffer, new: &Buffer) -> Self {
        debug_assert_eq!(old.width(), new.width(), "buffer widths must match");
        debug_assert_eq!(old.height(), new.height(), "buffer heights must match");

        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("diff_compute", width = old.width(), height = old.height())
                .entered();

        let width = old.width() as usize;
        let mut changes = Vec::with_capacity(old.cells().len() / 20);

        for (i, (a, b)) in old.cells().iter().zip(new.cells().iter()).enumerate() {
            if a != b {
                changes.push(((i % width) as u16, (i / width) as u16));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(changes = changes.len(), "diff computed");

        Self { changes }
    }

    /// Number of changed cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// True if nothing changed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Coalesce the changes into per-row runs.
    ///
    /// Changes are already in row-major order, so a single pass suffices.
    pub fn runs(&self) -> Vec<ChangeRun> {
        let mut runs: Vec<ChangeRun> = Vec::new();
        for &(x, y) in &self.changes {
            match runs.last_mut() {
                Some(run) if run.y == y && run.x1 + 1 == x => run.x1 = x,
                _ => runs.push(ChangeRun::new(y, x, x)),
            }
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn identical_buffers_produce_empty_diff() {
        let a = Buffer::new(10, 5);
        let b = Buffer::new(10, 5);
        let diff = BufferDiff::compute(&a, &b);
        assert!(diff.is_empty());
        assert!(diff.runs().is_empty());
    }

    #[test]
    fn adjacent_changes_form_one_run() {
        let old = Buffer::new(10, 5);
        let mut new = Buffer::new(10, 5);
        new.set(3, 2, Cell::from_char('a'));
        new.set(4, 2, Cell::from_char('b'));
        new.set(5, 2, Cell::from_char('c'));

        let diff = BufferDiff::compute(&old, &new);
        assert_eq!(diff.len(), 3);
        let runs = diff.runs();
        assert_eq!(runs, vec![ChangeRun::new(2, 3, 5)]);
        assert_eq!(runs[0].len(), 3);
    }

    #[test]
    fn gaps_split_runs() {
        let old = Buffer::new(10, 1);
        let mut new = Buffer::new(10, 1);
        new.set(0, 0, Cell::from_char('a'));
        new.set(2, 0, Cell::from_char('b'));

        let runs = BufferDiff::compute(&old, &new).runs();
        assert_eq!(runs, vec![ChangeRun::new(0, 0, 0), ChangeRun::new(0, 2, 2)]);
    }

    #[test]
    fn rows_split_runs() {
        let old = Buffer::new(3, 2);
        let mut new = Buffer::new(3, 2);
        // Last cell of row 0 and first cell of row 1: adjacent in memory,
        // but never one run.
        new.set(2, 0, Cell::from_char('a'));
        new.set(0, 1, Cell::from_char('b'));

        let runs = BufferDiff::compute(&old, &new).runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].y, 0);
        assert_eq!(runs[1].y, 1);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Runs partition the change set: same total, sorted,
            /// non-overlapping, one row each.
            #[test]
            fn runs_cover_exactly_the_changes(
                edits in prop::collection::vec((0u16..20, 0u16..10), 0..60),
            ) {
                let old = Buffer::new(20, 10);
                let mut new = Buffer::new(20, 10);
                for &(x, y) in &edits {
                    new.set(x, y, Cell::from_char('#'));
                }

                let diff = BufferDiff::compute(&old, &new);
                let runs = diff.runs();
                let total: usize = runs.iter().map(|r| r.len() as usize).sum();
                prop_assert_eq!(total, diff.len());
                for pair in runs.windows(2) {
                    prop_assert!(
                        pair[0].y < pair[1].y
                            || (pair[0].y == pair[1].y && pair[0].x1 + 1 < pair[1].x0)
                    );
                }
            }
        }
    }

    #[test]
    fn style_only_change_is_detected() {
        let mut old = Buffer::new(4, 1);
        let mut new = Buffer::new(4, 1);
        old.set(1, 0, Cell::from_char('x'));
        new.set(
            1,
            0,
            Cell::from_char('x').with_fg(crate::cell::Rgb::new(0, 255, 0)),
        );
        assert_eq!(BufferDiff::compute(&old, &new).len(), 1);
    }
}
