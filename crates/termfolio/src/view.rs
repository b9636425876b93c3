#![forbid(unsafe_code)]

//! Document layout and drawing.
//!
//! The portfolio is laid out once per terminal width into a flat list of
//! styled lines, one terminal row each. Scrolling is then just an index
//! into that list, and the section extents fall out of the layout pass
//! for free (in line units), which is what the tracker consumes.
//!
//! Only glyphs are drawn, so the backdrop stays visible in the margins
//! and between lines.

use termfolio_render::{Buffer, Rgb, StyleFlags};
use unicode_width::UnicodeWidthStr;

use crate::content::{self, Profile};
use crate::sections::{SectionId, SectionSpan};
use crate::theme;

/// Rows reserved at the top for the navigation bar.
pub const NAV_HEIGHT: u16 = 2;

/// Left/right page margin in cells.
const MARGIN: u16 = 2;

/// Hanging indent for wrapped bullet continuations.
const BULLET_INDENT: u16 = 2;

/// One styled run of text within a line.
#[derive(Debug, Clone)]
struct Segment {
    text: String,
    fg: Rgb,
    attrs: StyleFlags,
}

/// One laid-out document line.
#[derive(Debug, Clone, Default)]
pub struct Line {
    indent: u16,
    segments: Vec<Segment>,
}

impl Line {
    fn push(&mut self, text: impl Into<String>, fg: Rgb, attrs: StyleFlags) {
        self.segments.push(Segment {
            text: text.into(),
            fg,
            attrs,
        });
    }
}

/// The whole document, wrapped for one terminal width.
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    width: u16,
    lines: Vec<Line>,
    spans: Vec<SectionSpan>,
}

impl DocumentLayout {
    /// Lay out the profile for a terminal `width` cells wide.
    pub fn build(profile: &Profile, width: u16) -> Self {
        let mut b = LayoutBuilder::new(profile, width);
        b.hero();
        b.about();
        b.experience();
        b.skills();
        b.projects();
        b.contact();
        b.finish()
    }

    /// Terminal width this layout was built for.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total document height in lines.
    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Section extents in line units, in page order.
    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    /// Top line of a section, for nav jumps.
    pub fn section_top(&self, id: SectionId) -> u32 {
        self.spans
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.top)
            .unwrap_or(0)
    }

    /// Largest scroll offset that still shows a full viewport of content.
    pub fn max_scroll(&self, viewport_rows: u16) -> u32 {
        let visible = viewport_rows.saturating_sub(NAV_HEIGHT) as u32;
        self.line_count().saturating_sub(visible)
    }

    /// Draw the visible window of the document plus the nav bar.
    ///
    /// The backdrop must already be in `buffer`; the document draws over
    /// it glyph by glyph.
    pub fn draw(&self, buffer: &mut Buffer, scroll: u32, active: SectionId) {
        let rows = buffer.height();
        for row in NAV_HEIGHT..rows {
            let idx = scroll as usize + (row - NAV_HEIGHT) as usize;
            let Some(line) = self.lines.get(idx) else {
                break;
            };
            let mut cx = MARGIN + line.indent;
            for seg in &line.segments {
                cx = buffer.draw_str(cx, row, &seg.text, seg.fg, seg.attrs);
            }
        }
        draw_nav(buffer, active);
    }
}

/// Nav label positions for the current width: `(id, start_x, end_x)`,
/// end exclusive. Shared by the draw pass and mouse hit testing.
pub fn nav_spans(width: u16) -> Vec<(SectionId, u16, u16)> {
    let name_end = MARGIN + content::PROFILE.name.width() as u16;
    let mut x = name_end + 4;
    let mut out = Vec::with_capacity(SectionId::ALL.len());
    for id in SectionId::ALL {
        let w = id.label().width() as u16;
        if x + w > width {
            break;
        }
        out.push((id, x, x + w));
        x += w + 2;
    }
    out
}

/// Hit-test a click on the nav row against the label positions.
pub fn nav_hit(width: u16, x: u16) -> Option<SectionId> {
    nav_spans(width)
        .into_iter()
        .find(|&(_, start, end)| x >= start && x < end)
        .map(|(id, _, _)| id)
}

fn draw_nav(buffer: &mut Buffer, active: SectionId) {
    let width = buffer.width();
    // Clear the bar so the backdrop never bleeds into the chrome.
    buffer.fill(
        termfolio_core::geometry::Rect::new(0, 0, width, 1),
        termfolio_render::Cell::EMPTY,
    );
    buffer.draw_str(
        MARGIN,
        0,
        content::PROFILE.name,
        theme::ACCENT,
        StyleFlags::BOLD,
    );
    for (id, x, _) in nav_spans(width) {
        let (fg, attrs) = if id == active {
            (theme::ACCENT, StyleFlags::BOLD | StyleFlags::UNDERLINE)
        } else {
            (theme::MUTED, StyleFlags::empty())
        };
        buffer.draw_str(x, 0, id.label(), fg, attrs);
    }
    buffer.draw_rule(0, 1, width, theme::MUTED);
}

/// Word-wrap `text` to at most `width` display columns per line.
///
/// Words longer than the width land on their own line and get clipped
/// by the draw pass.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let w = word.width();
        if used == 0 {
            current.push_str(word);
            used = w;
        } else if used + 1 + w <= width {
            current.push(' ');
            current.push_str(word);
            used += 1 + w;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            used = w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Render a 10-slot proficiency bar like `████████░░ 90%`.
fn skill_bar(level: u8) -> String {
    let filled = ((level as usize + 5) / 10).min(10);
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(10 - filled),
        level
    )
}

struct LayoutBuilder<'a> {
    profile: &'a Profile,
    body_width: usize,
    lines: Vec<Line>,
    spans: Vec<SectionSpan>,
    width: u16,
}

impl<'a> LayoutBuilder<'a> {
    fn new(profile: &'a Profile, width: u16) -> Self {
        let body_width = width.saturating_sub(MARGIN * 2).max(10) as usize;
        Self {
            profile,
            body_width,
            lines: Vec::new(),
            spans: Vec::new(),
            width,
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn line(&mut self, indent: u16, text: &str, fg: Rgb, attrs: StyleFlags) {
        let mut line = Line {
            indent,
            ..Line::default()
        };
        line.push(text, fg, attrs);
        self.lines.push(line);
    }

    fn paragraph(&mut self, indent: u16, text: &str, fg: Rgb, attrs: StyleFlags) {
        let avail = self.body_width.saturating_sub(indent as usize).max(10);
        for wrapped in wrap(text, avail) {
            self.line(indent, &wrapped, fg, attrs);
        }
    }

    fn bullet(&mut self, text: &str) {
        let avail = self
            .body_width
            .saturating_sub(BULLET_INDENT as usize + 2)
            .max(10);
        for (i, wrapped) in wrap(text, avail).into_iter().enumerate() {
            let mut line = Line {
                indent: BULLET_INDENT,
                ..Line::default()
            };
            if i == 0 {
                line.push("▸ ", theme::ACCENT, StyleFlags::empty());
            } else {
                line.push("  ", theme::TEXT, StyleFlags::empty());
            }
            line.push(wrapped, theme::TEXT, StyleFlags::empty());
            self.lines.push(line);
        }
    }

    fn heading(&mut self, title: &str) {
        self.line(0, title, theme::ACCENT, StyleFlags::BOLD);
        let rule = "─".repeat(self.body_width.min(title.width() + 8));
        self.line(0, &rule, theme::MUTED, StyleFlags::DIM);
        self.blank();
    }

    fn begin(&mut self) -> u32 {
        self.lines.len() as u32
    }

    fn end(&mut self, id: SectionId, top: u32) {
        let height = self.lines.len() as u32 - top;
        self.spans.push(SectionSpan::new(id, top, height));
    }

    fn hero(&mut self) {
        let top = self.begin();
        self.blank();
        self.blank();
        self.line(0, self.profile.name, theme::BRIGHT, StyleFlags::BOLD);
        self.line(0, self.profile.title, theme::ACCENT, StyleFlags::empty());
        self.blank();
        self.paragraph(0, self.profile.tagline, theme::TEXT, StyleFlags::empty());
        self.blank();
        let mut stats = Line::default();
        for (i, stat) in self.profile.stats.iter().enumerate() {
            if i > 0 {
                stats.push("   ", theme::TEXT, StyleFlags::empty());
            }
            stats.push(stat.number, theme::BRIGHT, StyleFlags::BOLD);
            stats.push(" ", theme::TEXT, StyleFlags::empty());
            stats.push(stat.label, theme::MUTED, StyleFlags::empty());
        }
        self.lines.push(stats);
        self.blank();
        self.blank();
        self.end(SectionId::Home, top);
    }

    fn about(&mut self) {
        let top = self.begin();
        self.heading("ABOUT ME");
        for para in self.profile.about {
            self.paragraph(0, para, theme::TEXT, StyleFlags::empty());
            self.blank();
        }
        self.line(0, "Education", theme::BRIGHT, StyleFlags::BOLD);
        for entry in self.profile.education {
            self.line(BULLET_INDENT, entry, theme::TEXT, StyleFlags::empty());
        }
        self.blank();
        self.blank();
        self.end(SectionId::About, top);
    }

    fn experience(&mut self) {
        let top = self.begin();
        self.heading("EXPERIENCE");
        for job in self.profile.experience {
            self.line(0, job.role, theme::BRIGHT, StyleFlags::BOLD);
            let mut meta = Line::default();
            meta.push(job.company, theme::ACCENT, StyleFlags::empty());
            meta.push(
                format!(" · {}", job.location),
                theme::MUTED,
                StyleFlags::empty(),
            );
            self.lines.push(meta);
            self.line(0, job.period, theme::MUTED, StyleFlags::DIM);
            for bullet in job.bullets {
                self.bullet(bullet);
            }
            self.blank();
        }
        self.blank();
        self.end(SectionId::Experience, top);
    }

    fn skills(&mut self) {
        let top = self.begin();
        self.heading("SKILLS");
        let name_width = self
            .profile
            .skills
            .iter()
            .map(|s| s.name.width())
            .max()
            .unwrap_or(0);
        for skill in self.profile.skills {
            let mut line = Line::default();
            line.push(
                format!("{:<name_width$}  ", skill.name),
                theme::TEXT,
                StyleFlags::empty(),
            );
            line.push(skill_bar(skill.level), theme::BAR_FILL, StyleFlags::empty());
            self.lines.push(line);
        }
        self.blank();
        self.blank();
        self.end(SectionId::Skills, top);
    }

    /// One line of a project card: a rail glyph plus styled text.
    fn card_line(&mut self, rail: &str, text: &str, fg: Rgb, attrs: StyleFlags) {
        let mut line = Line::default();
        line.push(rail, theme::MUTED, StyleFlags::DIM);
        line.push(text, fg, attrs);
        self.lines.push(line);
    }

    fn projects(&mut self) {
        let top = self.begin();
        self.heading("PROJECTS");
        let avail = self.body_width.saturating_sub(2).max(10);
        for project in self.profile.projects {
            self.card_line("╭ ", project.title, theme::BRIGHT, StyleFlags::BOLD);
            for wrapped in wrap(project.description, avail) {
                self.card_line("│ ", &wrapped, theme::TEXT, StyleFlags::empty());
            }
            for wrapped in wrap(&project.tech.join(" · "), avail) {
                self.card_line("╰ ", &wrapped, theme::MUTED, StyleFlags::DIM);
            }
            self.blank();
        }
        self.blank();
        self.end(SectionId::Projects, top);
    }

    fn contact(&mut self) {
        let top = self.begin();
        self.heading("CONTACT");
        for item in self.profile.contact {
            let mut line = Line::default();
            line.push(
                format!("{}: ", item.label),
                theme::MUTED,
                StyleFlags::empty(),
            );
            line.push(item.value, theme::ACCENT, StyleFlags::UNDERLINE);
            self.lines.push(line);
        }
        self.blank();
        self.line(
            0,
            "q to quit · ↑/↓ PgUp/PgDn to scroll · 1-6 to jump",
            theme::MUTED,
            StyleFlags::DIM,
        );
        self.blank();
        self.end(SectionId::Contact, top);
    }

    fn finish(self) -> DocumentLayout {
        DocumentLayout {
            width: self.width,
            lines: self.lines,
            spans: self.spans,
        }
    }
}
