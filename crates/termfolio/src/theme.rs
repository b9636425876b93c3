#![forbid(unsafe_code)]

//! Color palette for the portfolio chrome and content.

use termfolio_render::Rgb;

/// Primary accent: bright cyan, used for headings and the active nav item.
pub const ACCENT: Rgb = Rgb::new(0, 255, 255);

/// Matrix green, the backdrop's base color.
pub const GREEN: Rgb = Rgb::new(0, 255, 0);

/// Body text.
pub const TEXT: Rgb = Rgb::new(214, 226, 232);

/// Secondary text (dates, tech lists, captions).
pub const MUTED: Rgb = Rgb::new(127, 147, 166);

/// Emphasis inside body text (names, employers).
pub const BRIGHT: Rgb = Rgb::new(255, 255, 255);

/// Skill bar fill.
pub const BAR_FILL: Rgb = Rgb::new(0, 210, 170);
