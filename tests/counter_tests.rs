// Host-side tests for the eased stat counters.

use fx_core::constants::COUNTER_VIEWPORT_FRACTION;
use fx_core::{ease_out_cubic, CounterAnimation, CounterGate};

#[test]
fn ease_out_cubic_endpoints_and_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    // Clamped outside the unit range.
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn counter_is_monotonic_and_ends_exact() {
    for target in [1_i64, 7, 15, 150, 999, 1_000_000] {
        let mut c = CounterAnimation::new(target);
        let mut last = 0;
        let mut t = 500.0; // arbitrary first rAF timestamp
        let end = t + 2000.0;
        loop {
            let s = c.sample(t);
            assert!(s.value >= last, "target {target}: {} < {last}", s.value);
            assert!(s.value <= target);
            last = s.value;
            if s.done {
                assert_eq!(s.value, target);
                assert!(t >= end);
                break;
            }
            t += 16.7;
        }
    }
}

#[test]
fn late_frame_snaps_to_target() {
    let mut c = CounterAnimation::new(42);
    c.sample(0.0);
    let s = c.sample(10_000.0);
    assert!(s.done);
    assert_eq!(s.value, 42);
}

#[test]
fn first_pass_starts_only_cards_in_view() {
    let mut gate = CounterGate::default();
    // 0.9 * 1000 = 900: the first two cards are in the zone, the third is not.
    let picked = gate.select(&[120.0, 850.0, 1400.0], 1000.0, COUNTER_VIEWPORT_FRACTION);
    assert_eq!(picked, vec![0, 1]);
    assert!(gate.has_run());
}

#[test]
fn later_passes_start_nothing() {
    let mut gate = CounterGate::default();
    assert_eq!(
        gate.select(&[850.0, 1400.0, 2000.0], 1000.0, COUNTER_VIEWPORT_FRACTION),
        vec![0]
    );
    // Everything has scrolled into view now, but the counters already ran.
    let again = gate.select(&[-400.0, 100.0, 600.0], 1000.0, COUNTER_VIEWPORT_FRACTION);
    assert!(again.is_empty());
}

#[test]
fn pass_with_nothing_in_view_does_not_latch() {
    let mut gate = CounterGate::default();
    assert!(gate
        .select(&[1200.0, 1800.0], 1000.0, COUNTER_VIEWPORT_FRACTION)
        .is_empty());
    assert!(!gate.has_run());
    assert_eq!(
        gate.select(&[300.0, 900.5], 1000.0, COUNTER_VIEWPORT_FRACTION),
        vec![0]
    );
}

#[test]
fn no_cards_never_latch() {
    let mut gate = CounterGate::default();
    assert!(gate.select(&[], 1000.0, COUNTER_VIEWPORT_FRACTION).is_empty());
    assert!(!gate.has_run());
}
