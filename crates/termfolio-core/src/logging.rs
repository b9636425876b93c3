#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports of tracing macros when the `tracing` feature is enabled so
//! downstream crates can log through one path. Library code keeps its call
//! sites behind `#[cfg(feature = "tracing")]` so the default build carries
//! no logging dependency at all.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};
