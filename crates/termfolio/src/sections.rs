#![forbid(unsafe_code)]

//! Page sections and the scroll-driven active-section tracker.
//!
//! The tracker probes `scroll + lookahead` against the measured vertical
//! extents of the sections, in declared order, and publishes the first
//! match for the navigation bar to highlight. A miss (e.g. before the
//! first layout pass) retains the previous value, so the tracker always
//! has an answer.

/// Identifier of one page region, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in page order. Declaration order is the tie-break:
    /// the first matching section wins if extents ever overlap.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in page order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Measured vertical extent of one section: `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: u32,
    pub height: u32,
}

impl SectionSpan {
    /// Create a span.
    pub const fn new(id: SectionId, top: u32, height: u32) -> Self {
        Self { id, top, height }
    }

    /// Whether the probe offset falls inside this span.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        offset >= self.top && offset < self.top.saturating_add(self.height)
    }
}

/// Default probe lookahead, compensating for the sticky header.
pub const DEFAULT_LOOKAHEAD: u32 = 100;

/// Scroll-position to active-section state machine.
///
/// One state per section; transitions only on scroll input; lives for
/// the page's lifetime.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    spans: Vec<SectionSpan>,
    active: SectionId,
    lookahead: u32,
}

impl SectionTracker {
    /// Create a tracker with the default lookahead. The initial active
    /// section is the first page region.
    pub fn new(spans: Vec<SectionSpan>) -> Self {
        Self {
            spans,
            active: SectionId::Home,
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }

    /// Override the lookahead (e.g. with the measured chrome height).
    #[must_use]
    pub fn with_lookahead(mut self, lookahead: u32) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Replace the measured extents after a (re)layout pass.
    ///
    /// Does not re-evaluate the active section; the next scroll does.
    pub fn set_spans(&mut self, spans: Vec<SectionSpan>) {
        self.spans = spans;
    }

    /// The currently active section.
    #[inline]
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Measured span for a section, if layout has produced one.
    pub fn span(&self, id: SectionId) -> Option<SectionSpan> {
        self.spans.iter().copied().find(|s| s.id == id)
    }

    /// Handle a scroll event: probe `scroll_y + lookahead` and publish
    /// the first section containing it. Returns the active section.
    pub fn on_scroll(&mut self, scroll_y: u32) -> SectionId {
        let probe = scroll_y.saturating_add(self.lookahead);
        if let Some(span) = self.spans.iter().find(|s| s.contains(probe)) {
            self.active = span.id;
        }
        self.active
    }
}
