use crate::constants::*;
use crate::dom::{self, js_err};
use fx_core::constants::{EASTER_EGG_DURATION_MS, EASTER_EGG_FILTER};
use web_sys as web;

#[inline]
pub fn hide_loader(document: &web::Document) {
    match document.get_element_by_id(LOADER_ID) {
        Some(el) => {
            _ = el.class_list().add_1(CLASS_HIDDEN);
        }
        None => log::debug!("[loader] no #{}", LOADER_ID),
    }
}

/// Tint the page and show the secret banner for a few seconds.
pub fn show_easter_egg(document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    dom::set_style(&body, "transition", "filter 0.5s ease");
    dom::set_style(&body, "filter", EASTER_EGG_FILTER);

    let banner = document.create_element("div").map_err(js_err)?;
    banner.set_text_content(Some(EASTER_EGG_MESSAGE));
    banner.set_attribute("style", EASTER_EGG_STYLE).map_err(js_err)?;
    body.append_child(&banner).map_err(js_err)?;

    dom::set_timeout(EASTER_EGG_DURATION_MS, move || {
        dom::set_style(&body, "filter", "none");
        banner.remove();
    })?;
    Ok(())
}
