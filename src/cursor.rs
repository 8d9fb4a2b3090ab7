use crate::constants::*;
use crate::dom;
use crate::frame;
use fx_core::CursorRing;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn place(el: &web::HtmlElement, pos: Vec2) {
    dom::set_style(el, "left", &dom::px(pos.x as f64));
    dom::set_style(el, "top", &dom::px(pos.y as f64));
}

/// Custom cursor: a dot pinned to the pointer and a ring easing after it.
pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let (Some(dot), Some(ring)) = (
        dom::query::<web::HtmlElement>(document, CURSOR_DOT_SELECTOR),
        dom::query::<web::HtmlElement>(document, CURSOR_RING_SELECTOR),
    ) else {
        log::debug!("[cursor] markup missing; disabled");
        return Ok(());
    };
    let state = Rc::new(RefCell::new(CursorRing::default()));

    {
        let state = state.clone();
        let dot = dot.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            state.borrow_mut().set_target(pos);
            place(&dot, pos);
        })?;
    }
    {
        let ring = ring.clone();
        frame::start_loop(move |_| {
            let pos = state.borrow_mut().step();
            place(&ring, pos);
            true
        });
    }

    if let Some(cursor) = document.get_element_by_id(CURSOR_ID) {
        for el in dom::query_all::<web::Element>(document, HOVERABLE_SELECTOR) {
            let on_enter = cursor.clone();
            dom::listen(&el, "mouseenter", move |_: web::Event| {
                _ = on_enter.class_list().add_1(CLASS_HOVERING);
            })?;
            let on_leave = cursor.clone();
            dom::listen(&el, "mouseleave", move |_: web::Event| {
                _ = on_leave.class_list().remove_1(CLASS_HOVERING);
            })?;
        }
    }

    for (event, opacity) in [("mouseleave", "0"), ("mouseenter", "1")] {
        let dot = dot.clone();
        let ring = ring.clone();
        dom::listen(document, event, move |_: web::Event| {
            dom::set_style(&dot, "opacity", opacity);
            dom::set_style(&ring, "opacity", opacity);
        })?;
    }
    Ok(())
}
