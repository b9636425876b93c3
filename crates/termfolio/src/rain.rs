#![forbid(unsafe_code)]

//! Ambient falling-glyph backdrop.
//!
//! One glyph falls per column; every tick the persistent trail buffer is
//! faded toward black and a fresh random glyph is stamped at each column
//! head, colored by its distance to the last pointer position. Columns
//! that pass the bottom edge reset to the top with a small per-tick
//! probability, staggering resets so the surface never flushes at once.
//!
//! The model works in the original's pixel units: a glyph cell is
//! `cell_size` pixels square, so `columns = floor(width / cell_size)`.
//! The terminal adapter maps one terminal cell to one glyph cell.
//!
//! # Determinism
//!
//! All randomness comes from an injected xorshift32 source; equal seeds
//! and inputs produce identical trails.
//!
//! # No Per-Frame Allocations
//!
//! Column offsets and the trail buffer are only reallocated on resize.

use termfolio_render::{Buffer, Cell, Rgb, StyleFlags};

/// The character set glyphs are drawn from.
pub const GLYPHS: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Tuning knobs for the rain backdrop.
#[derive(Debug, Clone, Copy)]
pub struct RainConfig {
    /// Glyph cell size in pixels.
    pub cell_size: f32,
    /// Cells a column head advances per tick.
    pub advance: f32,
    /// Per-tick probability of resetting a column that has passed the
    /// bottom edge.
    pub reset_probability: f32,
    /// Trail fade per tick (the low-alpha black overlay of the original).
    pub fade: f32,
    /// Pointer distance below which a head renders in the near tier.
    pub near_radius: f32,
    /// Pointer distance below which a head renders in the medium tier.
    pub far_radius: f32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            cell_size: 18.0,
            advance: 0.8,
            reset_probability: 0.025,
            fade: 0.08,
            near_radius: 120.0,
            far_radius: 250.0,
        }
    }
}

/// Pointer-distance styling tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Close to the pointer: bright cyan with glow.
    Near,
    /// Medium distance: green-to-cyan gradient.
    Medium,
    /// Far from the pointer: plain green, dimmed.
    Far,
}

impl Tier {
    /// Classify a pointer distance.
    #[inline]
    pub fn for_distance(distance: f32, config: &RainConfig) -> Self {
        if distance < config.near_radius {
            Tier::Near
        } else if distance < config.far_radius {
            Tier::Medium
        } else {
            Tier::Far
        }
    }
}

/// Deterministic xorshift32 PRNG.
///
/// Injected into [`RainFx`] so tests can seed it and replay exact frames.
#[derive(Debug, Clone, Copy)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a new generator. A zero seed is coerced to a fixed odd
    /// constant since xorshift32 has an all-zero fixed point.
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    /// Next raw value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// The ambient rain backdrop.
///
/// Owns all animation state exclusively: column offsets, trail colors,
/// the RNG, and the last observed pointer position. Nothing outside the
/// tick/resize/pointer operations reads or writes it.
#[derive(Debug, Clone)]
pub struct RainFx {
    config: RainConfig,
    /// Per-column fall offset in glyph cells. Never negative.
    drops: Vec<f32>,
    /// Persistent trail, row-major `rows x columns`.
    trail: Vec<Cell>,
    columns: usize,
    rows: usize,
    /// Last observed pointer position in pixel units.
    pointer: (f32, f32),
    rng: Xorshift32,
}

impl RainFx {
    /// Create a backdrop with the given config and RNG seed.
    ///
    /// The surface starts at zero size; call [`RainFx::resize`] before
    /// ticking. A zero-area surface stays a no-op.
    pub fn new(config: RainConfig, seed: u32) -> Self {
        Self {
            config,
            drops: Vec::new(),
            trail: Vec::new(),
            columns: 0,
            rows: 0,
            pointer: (0.0, 0.0),
            rng: Xorshift32::new(seed),
        }
    }

    /// Column count: a pure function of surface width and cell size.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row count of the trail grid.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Current per-column offsets (glyph cells).
    #[inline]
    pub fn offsets(&self) -> &[f32] {
        &self.drops
    }

    /// Record the last observed pointer position (pixel units).
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    /// Resize the surface (pixel units).
    ///
    /// Recomputes the column count; a same-size call is a no-op and
    /// existing offsets survive. On a real resize, offsets of retained
    /// columns are kept and new columns start at a random height, so the
    /// animation never visibly restarts.
    pub fn resize(&mut self, width: f32, height: f32) {
        let columns = if width > 0.0 {
            (width / self.config.cell_size) as usize
        } else {
            0
        };
        let rows = if height > 0.0 {
            (height / self.config.cell_size) as usize
        } else {
            0
        };

        if columns == self.columns && rows == self.rows {
            return;
        }

        let mut drops = Vec::with_capacity(columns);
        for i in 0..columns {
            if i < self.drops.len() {
                drops.push(self.drops[i].min(rows as f32 + 1.0));
            } else {
                drops.push(self.rng.next_f32() * rows as f32);
            }
        }

        self.columns = columns;
        self.rows = rows;
        self.drops = drops;
        self.trail = vec![Cell::EMPTY; columns * rows];
    }

    /// Advance the animation by one tick.
    ///
    /// Fades the trail, stamps one glyph per column head, and advances or
    /// probabilistically resets each column. Does nothing on a zero-area
    /// surface.
    pub fn tick(&mut self) {
        if self.columns == 0 || self.rows == 0 {
            return;
        }

        let keep = 1.0 - self.config.fade;
        for cell in &mut self.trail {
            if cell.is_blank() {
                continue;
            }
            let faded = cell.fg.scaled(keep);
            *cell = if faded.is_black() {
                Cell::EMPTY
            } else {
                Cell {
                    ch: cell.ch,
                    fg: faded,
                    attrs: StyleFlags::DIM,
                }
            };
        }

        let bottom = self.rows as f32;
        for i in 0..self.columns {
            let x = i as f32 * self.config.cell_size;
            let y = self.drops[i] * self.config.cell_size;
            let distance = distance(self.pointer, (x, y));
            let (fg, attrs) = self.style_for(distance);

            let glyph = GLYPHS[(self.rng.next_u32() as usize) % GLYPHS.len()] as char;
            let row = self.drops[i] as usize;
            if row < self.rows {
                self.trail[row * self.columns + i] = Cell {
                    ch: glyph,
                    fg,
                    attrs,
                };
            }

            if self.drops[i] > bottom {
                // Held at the bottom edge until the staggered reset fires.
                if self.rng.next_f32() < self.config.reset_probability {
                    self.drops[i] = 0.0;
                }
            } else {
                self.drops[i] += self.config.advance;
            }
        }
    }

    /// Composite the trail onto a buffer, clipped to its bounds.
    ///
    /// Blank trail cells are skipped so content drawn earlier survives
    /// under the margins; callers draw content after the backdrop.
    pub fn composite(&self, buffer: &mut Buffer) {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let cell = self.trail[row * self.columns + col];
                if !cell.is_blank() {
                    buffer.set(col as u16, row as u16, cell);
                }
            }
        }
    }

    /// Color and attributes for a head glyph at the given pointer distance.
    fn style_for(&self, dist: f32) -> (Rgb, StyleFlags) {
        match Tier::for_distance(dist, &self.config) {
            Tier::Near => (Rgb::new(0, 255, 255), StyleFlags::BOLD),
            Tier::Medium => {
                let span = self.config.far_radius - self.config.near_radius;
                let ratio = (self.config.far_radius - dist) / span;
                let green = (255.0 * (1.0 - ratio * 0.3)) as u8;
                let blue = (255.0 * ratio) as u8;
                (Rgb::new(0, green, blue), StyleFlags::empty())
            }
            Tier::Far => (Rgb::new(0, 255, 0), StyleFlags::DIM),
        }
    }
}

#[inline]
fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rain(width: f32, height: f32, seed: u32) -> RainFx {
        let mut fx = RainFx::new(RainConfig::default(), seed);
        fx.resize(width, height);
        fx
    }

    #[test]
    fn column_count_is_width_over_cell_size() {
        let fx = rain(800.0, 600.0, 1);
        assert_eq!(fx.columns(), 44);
        assert_eq!(fx.rows(), 33);
    }

    #[test]
    fn resize_same_size_is_idempotent() {
        let mut fx = rain(800.0, 600.0, 1);
        for _ in 0..5 {
            fx.tick();
        }
        let offsets = fx.offsets().to_vec();
        fx.resize(800.0, 600.0);
        assert_eq!(fx.columns(), 44);
        assert_eq!(fx.offsets(), offsets.as_slice());
    }

    #[test]
    fn resize_preserves_retained_columns() {
        let mut fx = rain(800.0, 600.0, 1);
        for _ in 0..3 {
            fx.tick();
        }
        let before = fx.offsets().to_vec();
        fx.resize(900.0, 600.0);
        assert_eq!(fx.columns(), 50);
        assert_eq!(&fx.offsets()[..44], &before[..]);
    }

    #[test]
    fn tier_boundaries_exact() {
        let config = RainConfig::default();
        assert_eq!(Tier::for_distance(0.0, &config), Tier::Near);
        assert_eq!(Tier::for_distance(119.9, &config), Tier::Near);
        assert_eq!(Tier::for_distance(120.0, &config), Tier::Medium);
        assert_eq!(Tier::for_distance(249.9, &config), Tier::Medium);
        assert_eq!(Tier::for_distance(250.0, &config), Tier::Far);
        assert_eq!(Tier::for_distance(10_000.0, &config), Tier::Far);
    }

    #[test]
    fn head_at_pointer_renders_near_tier() {
        // Surface 800x600, pointer at origin, column 0 forced to the top:
        // distance 0 selects the near tier (bright cyan, bold).
        let mut fx = rain(800.0, 600.0, 7);
        fx.set_pointer(0.0, 0.0);
        fx.drops[0] = 0.0;
        fx.tick();
        let head = fx.trail[0];
        assert_eq!(head.fg, Rgb::new(0, 255, 255));
        assert!(head.attrs.contains(StyleFlags::BOLD));
    }

    #[test]
    fn offsets_never_negative_and_bounded() {
        let mut fx = rain(360.0, 180.0, 42);
        let limit = fx.rows() as f32 + 1.0;
        for _ in 0..2000 {
            fx.tick();
            for &offset in fx.offsets() {
                assert!(offset >= 0.0);
                assert!(offset <= limit, "offset {offset} exceeded {limit}");
            }
        }
    }

    #[test]
    fn offsets_monotone_except_reset() {
        let mut fx = rain(360.0, 180.0, 42);
        let mut prev = fx.offsets().to_vec();
        for _ in 0..2000 {
            fx.tick();
            for (before, after) in prev.iter().zip(fx.offsets()) {
                assert!(*after >= *before || *after == 0.0);
            }
            prev = fx.offsets().to_vec();
        }
    }

    #[test]
    fn resets_happen_eventually_and_are_staggered() {
        let mut fx = rain(360.0, 90.0, 3);
        let mut saw_reset = false;
        for _ in 0..5000 {
            let prev = fx.offsets().to_vec();
            fx.tick();
            let resets = prev
                .iter()
                .zip(fx.offsets())
                .filter(|(b, a)| **a < **b)
                .count();
            if resets > 0 {
                saw_reset = true;
                // Never all columns at once.
                assert!(resets < fx.columns());
            }
        }
        assert!(saw_reset, "no column ever reset");
    }

    #[test]
    fn equal_seeds_produce_identical_trails() {
        let mut a = rain(400.0, 200.0, 99);
        let mut b = rain(400.0, 200.0, 99);
        a.set_pointer(50.0, 60.0);
        b.set_pointer(50.0, 60.0);
        for _ in 0..100 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.trail, b.trail);
        assert_eq!(a.offsets(), b.offsets());
    }

    #[test]
    fn zero_area_surface_is_a_no_op() {
        let mut fx = RainFx::new(RainConfig::default(), 1);
        fx.tick();
        fx.resize(0.0, 0.0);
        fx.tick();
        assert_eq!(fx.columns(), 0);

        let mut buffer = Buffer::new(4, 4);
        fx.composite(&mut buffer);
        assert!(buffer.cells().iter().all(|c| *c == Cell::EMPTY));
    }

    #[test]
    fn trail_fades_toward_black() {
        // One column, whole-cell advance: every tick the head moves down a
        // row, so the row stamped last tick must decay this tick.
        let config = RainConfig {
            advance: 1.0,
            ..RainConfig::default()
        };
        let mut fx = RainFx::new(config, 5);
        fx.resize(18.0, 180.0);
        assert_eq!(fx.columns(), 1);
        fx.drops[0] = 0.0;

        fx.tick();
        let stamped = fx.trail[0];
        assert!(!stamped.is_blank());

        fx.tick();
        let faded = fx.trail[0];
        assert_eq!(faded.fg, stamped.fg.scaled(1.0 - fx.config.fade));
        assert!(faded.attrs.contains(StyleFlags::DIM));

        // Repeated fading reaches black and the cell empties out.
        for _ in 0..600 {
            if fx.drops[0] < 1.0 {
                // Head wrapped back to the top; stop before it re-stamps.
                break;
            }
            fx.tick();
        }
        assert!(fx.trail[0].is_blank() || !fx.trail[0].fg.is_black());
    }

    #[test]
    fn xorshift_never_zero_and_f32_in_range() {
        let mut rng = Xorshift32::new(0);
        for _ in 0..1000 {
            assert_ne!(rng.next_u32(), 0);
        }
        let mut rng = Xorshift32::new(12345);
        for _ in 0..1000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f));
        }
    }
}
