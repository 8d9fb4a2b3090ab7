// Host-side tests for pointer effects and the mobile menu.

use fx_core::{magnetic_offset, tilt_angles, DragScroll, MenuEvent, MenuState, MenuTransition};

#[test]
fn tilt_is_zero_at_center_and_eight_degrees_at_edges() {
    let (w, h) = (300.0, 200.0);
    assert_eq!(tilt_angles(150.0, 100.0, w, h), (0.0, 0.0));
    // Top-left corner tips the card toward the viewer on both axes.
    assert_eq!(tilt_angles(0.0, 0.0, w, h), (8.0, -8.0));
    assert_eq!(tilt_angles(300.0, 200.0, w, h), (-8.0, 8.0));
    let (rx, ry) = tilt_angles(225.0, 150.0, w, h);
    assert!((rx + 4.0).abs() < 1e-12);
    assert!((ry - 4.0).abs() < 1e-12);
}

#[test]
fn magnetic_pull_is_thirty_percent() {
    let (x, y) = magnetic_offset(10.0, -20.0);
    assert!((x - 3.0).abs() < 1e-12);
    assert!((y + 6.0).abs() < 1e-12);
}

#[test]
fn drag_scroll_doubles_pointer_travel() {
    let mut drag = DragScroll::default();
    assert_eq!(drag.drag_to(50.0), None);

    drag.press(100.0, 400.0);
    assert!(drag.is_active());
    assert_eq!(drag.drag_to(100.0), Some(400.0));
    assert_eq!(drag.drag_to(130.0), Some(340.0));
    assert_eq!(drag.drag_to(60.0), Some(480.0));

    drag.release();
    assert_eq!(drag.drag_to(130.0), None);
}

#[test]
fn escape_on_closed_menu_is_a_no_op() {
    let mut menu = MenuState::default();
    for _ in 0..3 {
        assert_eq!(menu.apply(MenuEvent::Escape), None);
        assert!(!menu.is_open());
    }
}

#[test]
fn menu_toggles_and_closes_from_every_source() {
    for closer in [
        MenuEvent::Escape,
        MenuEvent::LinkClicked,
        MenuEvent::OutsideClick,
        MenuEvent::TogglePressed,
    ] {
        let mut menu = MenuState::default();
        assert_eq!(
            menu.apply(MenuEvent::TogglePressed),
            Some(MenuTransition::Opened)
        );
        assert_eq!(menu.apply(closer), Some(MenuTransition::Closed));
        assert_eq!(menu.apply(MenuEvent::Escape), None);
    }
}

#[test]
fn outside_click_and_link_click_ignore_closed_menu() {
    let mut menu = MenuState::default();
    assert_eq!(menu.apply(MenuEvent::OutsideClick), None);
    assert_eq!(menu.apply(MenuEvent::LinkClicked), None);
    assert!(!menu.is_open());
}
