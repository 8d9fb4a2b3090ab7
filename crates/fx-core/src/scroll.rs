//! Values derived from the scroll position on every scroll event.
//!
//! Nothing here is cached: the web layer feeds fresh geometry each tick.

/// Fill percentage of the reading-progress bar, clamped to `[0, 100]`.
///
/// `max_scroll` is `scrollHeight - innerHeight`; a page that cannot scroll
/// reports 0.
#[inline]
pub fn scroll_progress_percent(scroll_y: f64, max_scroll: f64) -> f64 {
    if max_scroll.is_nan() || max_scroll <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (100.0 * scroll_y / max_scroll).clamp(0.0, 100.0)
}

#[inline]
pub fn navbar_is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Vertical extent of a page section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Index of the section the nav should highlight, measured `offset` px below
/// the top of the viewport. When sections overlap the last one wins; `None`
/// means the current highlight should be left alone.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<usize> {
    let anchor_y = scroll_y + offset;
    sections.iter().rposition(|s| s.contains(anchor_y))
}

/// Whether an element whose bounding top is `rect_top` has scrolled far
/// enough into a viewport of `viewport_height` to trigger.
#[inline]
pub fn is_in_trigger_zone(rect_top: f64, viewport_height: f64, fraction: f64) -> bool {
    rect_top < viewport_height * fraction
}
