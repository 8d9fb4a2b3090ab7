use crate::constants::*;
use crate::dom;
use fx_core::{
    magnetic_offset, tilt_angles, tilt_reset_transform, tilt_transform, translate_transform,
};
use web_sys as web;

/// Hover-in disables transitions so the transform tracks the pointer 1:1.
fn wire_hover_transform(
    el: &web::HtmlElement,
    on_move: impl Fn(&web::HtmlElement, &web::MouseEvent, &web::DomRect) + 'static,
    reset_transform: String,
    reset_transition: &'static str,
) -> anyhow::Result<()> {
    let target = el.clone();
    dom::listen(el, "mousemove", move |ev: web::MouseEvent| {
        let rect = target.get_bounding_client_rect();
        on_move(&target, &ev, &rect);
    })?;
    let target = el.clone();
    dom::listen(el, "mouseleave", move |_: web::Event| {
        dom::set_style(&target, "transform", &reset_transform);
        dom::set_style(&target, "transition", reset_transition);
    })?;
    let target = el.clone();
    dom::listen(el, "mouseenter", move |_: web::Event| {
        dom::set_style(&target, "transition", "none");
    })
}

pub fn wire_tilt(document: &web::Document) -> anyhow::Result<()> {
    for card in dom::query_all::<web::HtmlElement>(document, TILT_SELECTOR) {
        wire_hover_transform(
            &card,
            |el, ev, rect| {
                let x = ev.client_x() as f64 - rect.left();
                let y = ev.client_y() as f64 - rect.top();
                let (rx, ry) = tilt_angles(x, y, rect.width(), rect.height());
                dom::set_style(el, "transform", &tilt_transform(rx, ry));
            },
            tilt_reset_transform(),
            TILT_RESET_TRANSITION,
        )?;
    }
    Ok(())
}

pub fn wire_magnetic(document: &web::Document) -> anyhow::Result<()> {
    for btn in dom::query_all::<web::HtmlElement>(document, MAGNETIC_SELECTOR) {
        wire_hover_transform(
            &btn,
            |el, ev, rect| {
                let dx = ev.client_x() as f64 - rect.left() - rect.width() / 2.0;
                let dy = ev.client_y() as f64 - rect.top() - rect.height() / 2.0;
                let (tx, ty) = magnetic_offset(dx, dy);
                dom::set_style(el, "transform", &translate_transform(tx, ty));
            },
            translate_transform(0.0, 0.0),
            MAGNETIC_RESET_TRANSITION,
        )?;
    }
    Ok(())
}

pub fn wire_spotlight(document: &web::Document) -> anyhow::Result<()> {
    let (Some(spotlight), Some(section)) = (
        dom::by_id::<web::HtmlElement>(document, SPOTLIGHT_ID),
        dom::by_id::<web::HtmlElement>(document, CONTACT_SECTION_ID),
    ) else {
        log::debug!("[spotlight] markup missing; disabled");
        return Ok(());
    };
    let area = section.clone();
    dom::listen(&section, "mousemove", move |ev: web::MouseEvent| {
        let rect = area.get_bounding_client_rect();
        dom::set_style(&spotlight, "left", &dom::px(ev.client_x() as f64 - rect.left()));
        dom::set_style(&spotlight, "top", &dom::px(ev.client_y() as f64 - rect.top()));
    })
}
