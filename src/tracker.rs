//! Scroll-linked page state: progress through the page, which section is
//! in focus, and which sections have already faded in.
//!
//! Geometry comes from a [`Viewport`], so everything here runs the same in
//! the browser and in tests.

use std::collections::BTreeSet;

use crate::section::SectionId;

/// Scroll offset past which the nav bar and rails switch to their solid look.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Distance of the active-section probe line below the viewport top.
pub const ACTIVE_PROBE_PX: f64 = 100.0;
/// Fraction of a section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Ratios the visibility observer reports at. The smaller steps let sections
/// taller than ten viewports still fade in.
pub const REVEAL_STEPS: [f64; 4] = [0.01, 0.025, 0.05, REVEAL_THRESHOLD];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn scrollable_height(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }

    /// Percentage of the scrollable height already scrolled, in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scrollable_height();
        let top = self.scroll_top.max(0.0);
        if top >= scrollable {
            return 100.0;
        }
        (top / scrollable * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_top > SCROLLED_THRESHOLD_PX
    }
}

/// A section's box relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub progress: f64,
    pub scrolled: bool,
    pub active: Option<SectionId>,
}

impl Default for ScrollSnapshot {
    fn default() -> Self {
        Self {
            progress: 0.0,
            scrolled: false,
            active: Some(SectionId::Home),
        }
    }
}

/// Host geometry the tracker and navigator read from.
pub trait Viewport {
    fn metrics(&self) -> ScrollMetrics;

    /// `None` when the section is not rendered.
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds>;

    /// Smoothly scrolls the section's top edge to the viewport top.
    /// Returns false when the section is not rendered.
    fn scroll_to_section(&self, id: SectionId) -> bool;
}

/// First section, in priority order, whose box straddles the probe line.
pub fn active_section<F>(mut bounds_of: F) -> Option<SectionId>
where
    F: FnMut(SectionId) -> Option<SectionBounds>,
{
    SectionId::ALL
        .into_iter()
        .find(|&id| bounds_of(id).is_some_and(|b| b.contains(ACTIVE_PROBE_PX)))
}

/// Reads everything a scroll event updates.
pub fn sample<V: Viewport + ?Sized>(viewport: &V) -> ScrollSnapshot {
    let metrics = viewport.metrics();
    ScrollSnapshot {
        progress: metrics.progress(),
        scrolled: metrics.is_scrolled(),
        active: active_section(|id| viewport.section_bounds(id)),
    }
}

/// Scrolls to the section named `target`. Unknown or unrendered targets are
/// a no-op and return `None`.
pub fn navigate<V: Viewport + ?Sized>(viewport: &V, target: &str) -> Option<SectionId> {
    let id = target.parse::<SectionId>().ok()?;
    viewport.scroll_to_section(id).then_some(id)
}

/// The visible fraction a section needs before it is revealed.
///
/// Normally [`REVEAL_THRESHOLD`]. A section taller than the viewport can show
/// at most `viewport_height / section_height` of itself, so the requirement
/// drops to the largest [`REVEAL_STEPS`] entry it can reach. Sections over a
/// hundred viewports tall need the smallest step and never qualify.
pub fn required_reveal_ratio(section_height: f64, viewport_height: f64) -> f64 {
    if section_height <= 0.0 || viewport_height <= 0.0 {
        return REVEAL_THRESHOLD;
    }
    let reachable = viewport_height / section_height;
    REVEAL_STEPS
        .into_iter()
        .rev()
        .find(|&step| step <= reachable)
        .unwrap_or(REVEAL_STEPS[0])
}

/// Whether an intersection report is enough to reveal its section.
pub fn reaches_reveal_threshold(is_intersecting: bool, ratio: f64, required: f64) -> bool {
    is_intersecting && ratio >= required
}

/// Sections that have been on screen at least once. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSections(BTreeSet<SectionId>);

impl VisibleSections {
    /// Returns true the first time `id` is revealed.
    pub fn reveal(&mut self, id: SectionId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.0.iter().copied()
    }

    pub fn fade_class(&self, id: SectionId) -> &'static str {
        if self.contains(id) {
            "fade-in"
        } else {
            "opacity-0"
        }
    }
}
