//! Pointer-driven transforms: card tilt, magnetic buttons, drag scrolling and
//! the eased cursor ring.

use crate::constants::*;
use glam::Vec2;

/// Rotation in degrees `(rotate_x, rotate_y)` for a pointer at `(x, y)`
/// inside a card of `width` × `height`.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let cx = width / 2.0;
    let cy = height / 2.0;
    if cx <= 0.0 || cy <= 0.0 {
        return (0.0, 0.0);
    }
    let rotate_x = ((y - cy) / cy) * -TILT_MAX_DEG;
    let rotate_y = ((x - cx) / cx) * TILT_MAX_DEG;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
        TILT_PERSPECTIVE_PX, rotate_x, rotate_y, TILT_LIFT_PX
    )
}

pub fn tilt_reset_transform() -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0) translateZ(0)",
        TILT_PERSPECTIVE_PX
    )
}

/// Translation pulling a button toward a pointer that is `(dx, dy)` away from
/// its center.
#[inline]
pub fn magnetic_offset(dx: f64, dy: f64) -> (f64, f64) {
    (dx * MAGNETIC_PULL, dy * MAGNETIC_PULL)
}

pub fn translate_transform(x: f64, y: f64) -> String {
    format!("translate({}px, {}px)", x, y)
}

/// Press/move/release conversion of horizontal pointer travel into a scroll
/// offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragScroll {
    active: bool,
    start_x: f64,
    start_scroll_left: f64,
}

impl DragScroll {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// `x` is the pointer position relative to the track (pageX - offsetLeft).
    pub fn press(&mut self, x: f64, scroll_left: f64) {
        self.active = true;
        self.start_x = x;
        self.start_scroll_left = scroll_left;
    }

    /// New `scrollLeft` for the track, or `None` when no drag is in progress.
    pub fn drag_to(&self, x: f64) -> Option<f64> {
        self.active
            .then(|| self.start_scroll_left - (x - self.start_x) * DRAG_SCROLL_MULTIPLIER)
    }

    pub fn release(&mut self) {
        self.active = false;
    }
}

/// Trailing ring of the custom cursor; closes a fixed fraction of the gap to
/// the pointer every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorRing {
    pub pos: Vec2,
    pub target: Vec2,
}

impl CursorRing {
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn step(&mut self) -> Vec2 {
        self.pos += (self.target - self.pos) * CURSOR_RING_FOLLOW;
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_of_degenerate_card_is_flat() {
        assert_eq!(tilt_angles(3.0, 4.0, 0.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn transforms_format_as_css() {
        assert_eq!(
            tilt_transform(-8.0, 4.5),
            "perspective(1000px) rotateX(-8deg) rotateY(4.5deg) translateZ(10px)"
        );
        assert_eq!(translate_transform(3.0, -1.5), "translate(3px, -1.5px)");
        assert_eq!(
            tilt_reset_transform(),
            "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)"
        );
    }

    #[test]
    fn cursor_ring_closes_fifteen_percent() {
        let mut ring = CursorRing::default();
        ring.set_target(Vec2::new(100.0, 0.0));
        let p = ring.step();
        assert!((p.x - 15.0).abs() < 1e-4);
        let p = ring.step();
        assert!((p.x - 27.75).abs() < 1e-4);
    }
}
