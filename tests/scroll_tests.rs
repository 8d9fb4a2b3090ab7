// Host-side tests for scroll-derived visual state.

use fx_core::constants::*;
use fx_core::{
    active_section, is_in_trigger_zone, navbar_is_scrolled, scroll_progress_percent, FxParams,
    SectionBounds,
};

#[test]
fn progress_is_linear_and_clamped() {
    let max = 2400.0;
    let mut s = 0.0;
    while s <= max {
        let p = scroll_progress_percent(s, max);
        assert!((p - 100.0 * s / max).abs() < 1e-9);
        s += 37.5;
    }
    assert_eq!(scroll_progress_percent(max, max), 100.0);
    // Overscroll (rubber-banding) stays in range.
    assert_eq!(scroll_progress_percent(-20.0, max), 0.0);
    assert_eq!(scroll_progress_percent(max + 300.0, max), 100.0);
}

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds {
            top: 0.0,
            height: 800.0,
        },
        SectionBounds {
            top: 800.0,
            height: 600.0,
        },
        SectionBounds {
            top: 1400.0,
            height: 1000.0,
        },
    ]
}

#[test]
fn active_section_is_measured_below_the_navbar() {
    let s = sections();
    assert_eq!(active_section(&s, 0.0, NAV_HIGHLIGHT_OFFSET), Some(0));
    // 679 + 120 = 799 is still the first section; 680 + 120 reaches the second.
    assert_eq!(active_section(&s, 679.0, NAV_HIGHLIGHT_OFFSET), Some(0));
    assert_eq!(active_section(&s, 680.0, NAV_HIGHLIGHT_OFFSET), Some(1));
    assert_eq!(active_section(&s, 1500.0, NAV_HIGHLIGHT_OFFSET), Some(2));
}

#[test]
fn no_section_leaves_highlight_alone() {
    let s = sections();
    assert_eq!(active_section(&s, 5000.0, NAV_HIGHLIGHT_OFFSET), None);
    assert_eq!(active_section(&[], 0.0, NAV_HIGHLIGHT_OFFSET), None);
}

#[test]
fn overlapping_sections_prefer_the_later_one() {
    let s = vec![
        SectionBounds {
            top: 0.0,
            height: 1000.0,
        },
        SectionBounds {
            top: 500.0,
            height: 200.0,
        },
    ];
    assert_eq!(active_section(&s, 480.0, NAV_HIGHLIGHT_OFFSET), Some(1));
}

#[test]
fn reveal_triggers_below_87_percent_of_viewport() {
    let vh = 1000.0;
    let fraction = FxParams::default().reveal_fraction;
    assert!(is_in_trigger_zone(869.0, vh, fraction));
    assert!(!is_in_trigger_zone(870.5, vh, fraction));
    assert!(is_in_trigger_zone(-300.0, vh, fraction));
}

#[test]
fn counters_trigger_below_90_percent_of_viewport() {
    let vh = 1000.0;
    assert!(is_in_trigger_zone(899.0, vh, COUNTER_VIEWPORT_FRACTION));
    assert!(!is_in_trigger_zone(900.5, vh, COUNTER_VIEWPORT_FRACTION));
}

#[test]
fn navbar_uses_the_configured_threshold() {
    let defaults = FxParams::default();
    assert!(!navbar_is_scrolled(50.0, defaults.navbar_threshold));
    assert!(navbar_is_scrolled(100.0, defaults.navbar_threshold));

    let params = FxParams {
        navbar_threshold: 500.0,
        ..FxParams::default()
    };
    assert!(!navbar_is_scrolled(100.0, params.navbar_threshold));
    assert!(navbar_is_scrolled(501.0, params.navbar_threshold));
}

#[test]
fn reveal_uses_the_configured_fraction() {
    let params = FxParams {
        reveal_fraction: 0.1,
        ..FxParams::default()
    };
    assert!(!is_in_trigger_zone(800.0, 1000.0, params.reveal_fraction));
    assert!(is_in_trigger_zone(99.0, 1000.0, params.reveal_fraction));
}
