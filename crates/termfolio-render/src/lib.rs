#![forbid(unsafe_code)]

//! Render kernel for termfolio.
//!
//! A deliberately small pipeline: draw into a [`buffer::Buffer`] of styled
//! cells, diff it against the previously presented frame, and emit the
//! changed runs as ANSI through the [`presenter::Presenter`].

pub mod buffer;
pub mod cell;
pub mod diff;
pub mod presenter;

pub use buffer::Buffer;
pub use cell::{Cell, Rgb, StyleFlags};
pub use diff::{BufferDiff, ChangeRun};
pub use presenter::Presenter;
