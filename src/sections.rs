//! Section scroll bookkeeping
//!
//! The page body is a vertical run of named sections. This module owns the
//! geometry the navbar and reveal animations react to: which sections have
//! entered the viewport (a latched flag, the reveal plays once), which
//! section currently occupies the viewport's reference line, and whether the
//! navbar has scrolled past its condensed-style threshold. Pure geometry
//! over y-extents, no egui types.

use crate::constants::scroll;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    Projects,
    About,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Projects,
        SectionId::About,
        SectionId::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Projects => "Projects",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }
}

#[derive(Debug)]
struct SectionEntry {
    id: SectionId,
    revealed: bool,
    // y-extent from the last layout pass, same coordinate space as the
    // viewport passed to `update`
    extent: Option<(f32, f32)>,
}

#[derive(Debug)]
pub struct SectionTracker {
    entries: Vec<SectionEntry>,
}

impl SectionTracker {
    pub fn new() -> Self {
        let entries = SectionId::ALL
            .iter()
            .map(|&id| SectionEntry {
                id,
                revealed: false,
                extent: None,
            })
            .collect();
        Self { entries }
    }

    /// Record a section's y-extent as laid out this frame
    pub fn record_extent(&mut self, id: SectionId, top: f32, bottom: f32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.extent = Some((top, bottom));
        }
    }

    /// Latch the revealed flag for every section that has entered the
    /// viewport far enough. Once revealed, a section stays revealed.
    pub fn update(&mut self, viewport_top: f32, viewport_bottom: f32) {
        let reveal_line =
            viewport_top + (viewport_bottom - viewport_top) * scroll::REVEAL_FRACTION;
        for entry in &mut self.entries {
            if entry.revealed {
                continue;
            }
            if let Some((top, bottom)) = entry.extent
                && top < reveal_line
                && bottom > viewport_top
            {
                entry.revealed = true;
            }
        }
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .is_some_and(|e| e.revealed)
    }

    /// The section occupying the viewport's reference line. When the line
    /// falls in a gap, the last section starting above it wins; before the
    /// first section, the first wins. None only when no extent is recorded.
    pub fn current(&self, viewport_top: f32, viewport_bottom: f32) -> Option<SectionId> {
        let line = viewport_top + (viewport_bottom - viewport_top) * scroll::CURRENT_LINE_FRACTION;

        let mut best: Option<(SectionId, f32)> = None;
        let mut first: Option<(SectionId, f32)> = None;
        for entry in &self.entries {
            let Some((top, bottom)) = entry.extent else {
                continue;
            };
            if first.is_none_or(|(_, t)| top < t) {
                first = Some((entry.id, top));
            }
            if top <= line && line < bottom {
                return Some(entry.id);
            }
            if top <= line && best.is_none_or(|(_, t)| top > t) {
                best = Some((entry.id, top));
            }
        }
        best.or(first).map(|(id, _)| id)
    }
}

/// Condensed navbar style past a fixed scroll offset
pub fn navbar_scrolled(offset: f32) -> bool {
    offset > scroll::NAVBAR_THRESHOLD
}
