#![forbid(unsafe_code)]

//! The portfolio application model.
//!
//! Owns the three moving parts and routes events between them:
//! scroll input feeds the section tracker, pointer input feeds the rain
//! backdrop, and ticks advance the animation. The view is backdrop
//! first, document second, so glyphs show through the page margins.

use termfolio_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use termfolio_render::Buffer;

use crate::content::PROFILE;
use crate::rain::{RainConfig, RainFx};
use crate::runtime::{Cmd, Model};
use crate::sections::{SectionId, SectionTracker};
use crate::view::{self, DocumentLayout, NAV_HEIGHT};

/// Lines scrolled per wheel notch.
const WHEEL_STEP: u32 = 3;

/// The top-level model.
pub struct App {
    rain: RainFx,
    tracker: SectionTracker,
    layout: DocumentLayout,
    /// Scroll offset in document lines.
    scroll: u32,
    /// Terminal size in cells.
    viewport: (u16, u16),
    /// Ticks are dropped while unfocused so the backdrop pauses.
    focused: bool,
    /// Pixels per glyph cell, for mapping terminal cells to pointer
    /// coordinates.
    cell_px: f32,
}

impl App {
    /// Create the app. `seed` drives the backdrop's RNG.
    ///
    /// The layout is a placeholder until the first resize event, which
    /// the runtime delivers before the first frame.
    pub fn new(seed: u32) -> Self {
        let config = RainConfig::default();
        let cell_px = config.cell_size;
        let layout = DocumentLayout::build(&PROFILE, 80);
        // Probe just past the nav bar so a section counts as active as
        // soon as its first line clears the chrome.
        let tracker = SectionTracker::new(layout.spans().to_vec())
            .with_lookahead(NAV_HEIGHT as u32 + 1);
        Self {
            rain: RainFx::new(config, seed),
            tracker,
            layout,
            scroll: 0,
            viewport: (0, 0),
            focused: true,
            cell_px,
        }
    }

    /// Currently highlighted section.
    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    /// Current scroll offset in document lines.
    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    /// Backdrop state, for inspection.
    pub fn rain(&self) -> &RainFx {
        &self.rain
    }

    /// Scroll straight to a section's first line.
    pub fn jump_to(&mut self, id: SectionId) {
        self.set_scroll(self.layout.section_top(id));
    }

    fn set_scroll(&mut self, target: u32) {
        self.scroll = target.min(self.layout.max_scroll(self.viewport.1));
        self.tracker.on_scroll(self.scroll);
    }

    fn scroll_by(&mut self, delta: i64) {
        let target = (self.scroll as i64 + delta).max(0) as u32;
        self.set_scroll(target);
    }

    fn page(&self) -> u32 {
        self.viewport.1.saturating_sub(NAV_HEIGHT).max(1) as u32
    }

    fn on_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        if self.layout.width() != width {
            // Rewrapping moves every section; keep the reader anchored
            // at the same offset within the active section.
            let active = self.tracker.active();
            let offset = self.scroll.saturating_sub(self.layout.section_top(active));
            self.layout = DocumentLayout::build(&PROFILE, width);
            self.tracker.set_spans(self.layout.spans().to_vec());
            self.scroll = self.layout.section_top(active).saturating_add(offset);
        }
        self.rain.resize(
            width as f32 * self.cell_px,
            height as f32 * self.cell_px,
        );
        // Re-clamp against the new document height.
        self.set_scroll(self.scroll);
    }

    fn on_key(&mut self, key: KeyEvent) -> Cmd {
        if key.is_char('q') || key.code == KeyCode::Escape || (key.ctrl() && key.is_char('c')) {
            return Cmd::Quit;
        }
        match key.code {
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(self.page() as i64)),
            KeyCode::PageDown => self.scroll_by(self.page() as i64),
            KeyCode::Home => self.set_scroll(0),
            KeyCode::End => self.set_scroll(u32::MAX),
            KeyCode::Tab => self.cycle(1),
            KeyCode::BackTab => self.cycle(-1),
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.jump_to(SectionId::ALL[idx]);
            }
            _ => {}
        }
        Cmd::None
    }

    fn cycle(&mut self, direction: i32) {
        let count = SectionId::ALL.len() as i32;
        let next = (self.tracker.active().index() as i32 + direction).rem_euclid(count);
        self.jump_to(SectionId::ALL[next as usize]);
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                // Pointer lands at the center of its glyph cell.
                self.rain.set_pointer(
                    (mouse.column as f32 + 0.5) * self.cell_px,
                    (mouse.row as f32 + 0.5) * self.cell_px,
                );
            }
            MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_STEP as i64)),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP as i64),
            MouseEventKind::Down(MouseButton::Left) if mouse.row < NAV_HEIGHT => {
                if let Some(id) = view::nav_hit(self.viewport.0, mouse.column) {
                    self.jump_to(id);
                }
            }
            _ => {}
        }
    }
}

impl Model for App {
    fn update(&mut self, event: Event) -> Cmd {
        match event {
            Event::Key(key) => return self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            Event::Resize { width, height } => self.on_resize(width, height),
            Event::Focus(gained) => self.focused = gained,
            Event::Tick => {
                if self.focused {
                    self.rain.tick();
                }
            }
        }
        Cmd::None
    }

    fn view(&self, buffer: &mut Buffer) {
        self.rain.composite(buffer);
        self.layout.draw(buffer, self.scroll, self.tracker.active());
    }
}
