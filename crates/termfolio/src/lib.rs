#![forbid(unsafe_code)]

//! termfolio: a single-screen terminal portfolio.
//!
//! Two pieces of presentation logic cooperate, both reactive and both
//! owned by the [`app::App`] model:
//!
//! - the ambient [`rain`] backdrop: a falling-glyph animation on a fixed
//!   50 ms cadence, colored by distance to the last pointer position
//! - the [`sections`] tracker: maps the current scroll offset to the
//!   active page section for the navigation bar
//!
//! Everything else is hardcoded [`content`] rendered by [`view`] into a
//! cell buffer and presented by the [`runtime`] loop.

pub mod app;
pub mod cli;
pub mod content;
pub mod rain;
pub mod runtime;
pub mod sections;
pub mod theme;
pub mod view;
