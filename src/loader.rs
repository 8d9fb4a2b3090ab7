use crate::dom;
use crate::overlay;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the page locked behind the loader until `load`, then after
/// `delay_ms` hide it, unlock scrolling and run `on_ready`.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    delay_ms: i32,
    on_ready: impl FnOnce() + 'static,
) -> anyhow::Result<()> {
    if let Some(body) = document.body() {
        dom::set_style(&body, "overflow", "hidden");
    }

    let doc = document.clone();
    let reveal_page = move || {
        let scheduled = dom::set_timeout(delay_ms, move || {
            overlay::hide_loader(&doc);
            if let Some(body) = doc.body() {
                dom::set_style(&body, "overflow", "auto");
            }
            on_ready();
        });
        if let Err(e) = scheduled {
            log::error!("[loader] could not schedule reveal: {:?}", e);
        }
    };

    // The module can finish loading after the window `load` event.
    if document.ready_state() == "complete" {
        reveal_page();
        return Ok(());
    }
    let callback = Closure::once_into_js(reveal_page);
    window
        .add_event_listener_with_callback("load", callback.unchecked_ref())
        .map_err(dom::js_err)
}
