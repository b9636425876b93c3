#![forbid(unsafe_code)]

//! Core terminal primitives for termfolio.
//!
//! This crate owns the crossterm boundary: raw-mode lifecycle, canonical
//! event types, and the geometric primitives shared by the render and
//! application crates.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod terminal_session;

pub use event::{Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::Rect;
pub use terminal_session::{SessionOptions, TerminalSession};
