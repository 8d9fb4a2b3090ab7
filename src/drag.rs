use crate::constants::PROJECTS_TRACK_ID;
use crate::dom;
use fx_core::DragScroll;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn track_x(ev: &web::MouseEvent, track: &web::HtmlElement) -> f64 {
    (ev.page_x() - track.offset_left()) as f64
}

/// Click-and-drag horizontal scrolling for the projects track.
pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let Some(track) = dom::by_id::<web::HtmlElement>(document, PROJECTS_TRACK_ID) else {
        log::debug!("[drag] no #{}; disabled", PROJECTS_TRACK_ID);
        return Ok(());
    };
    let drag = Rc::new(RefCell::new(DragScroll::default()));

    {
        let drag = drag.clone();
        let t = track.clone();
        dom::listen(&track, "mousedown", move |ev: web::MouseEvent| {
            dom::set_style(&t, "cursor", "grabbing");
            drag.borrow_mut().press(track_x(&ev, &t), t.scroll_left() as f64);
        })?;
    }
    for event in ["mouseleave", "mouseup"] {
        let drag = drag.clone();
        let t = track.clone();
        dom::listen(&track, event, move |_: web::Event| {
            drag.borrow_mut().release();
            dom::set_style(&t, "cursor", "grab");
        })?;
    }
    let t = track.clone();
    dom::listen(&track, "mousemove", move |ev: web::MouseEvent| {
        if let Some(left) = drag.borrow().drag_to(track_x(&ev, &t)) {
            ev.prevent_default();
            t.set_scroll_left(left as i32);
        }
    })
}
