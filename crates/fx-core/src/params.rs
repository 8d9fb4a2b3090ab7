//! Tunable parameters gathered in one place.
//!
//! The page has no runtime configuration source; `FxParams::default()` is the
//! single configuration used by the web frontend. Tests build variations of it
//! to exercise edge cases (tiny pools, custom role lists).

use crate::constants::*;

#[derive(Clone, Debug)]
pub struct FxParams {
    pub loader_delay_ms: i32,
    pub particle_count: usize,
    pub connection_distance: f32,
    pub repel_radius: f32,
    pub roles: Vec<String>,
    pub navbar_threshold: f64,
    pub nav_offset: f64,
    pub reveal_fraction: f64,
    pub counter_fraction: f64,
    pub counter_duration_ms: f64,
}

impl Default for FxParams {
    fn default() -> Self {
        Self {
            loader_delay_ms: LOADER_DELAY_MS,
            particle_count: PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            repel_radius: POINTER_REPEL_RADIUS,
            roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
            navbar_threshold: NAVBAR_SCROLLED_THRESHOLD,
            nav_offset: NAV_HIGHLIGHT_OFFSET,
            reveal_fraction: REVEAL_VIEWPORT_FRACTION,
            counter_fraction: COUNTER_VIEWPORT_FRACTION,
            counter_duration_ms: COUNTER_DURATION_MS,
        }
    }
}
