#![cfg(target_arch = "wasm32")]
use fx_core::FxParams;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod cursor;
mod dom;
mod drag;
mod events;
mod frame;
mod loader;
mod navbar;
mod overlay;
mod particles;
mod reveal;
mod typed;

/// Log a feature that failed to wire; the rest of the page keeps working.
fn report(feature: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{}] {:?}", feature, e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let params = Rc::new(FxParams::default());
    let touch = dom::is_touch_device(&window);
    log::info!("touch device: {}", touch);

    let reveal_targets = reveal::reveal_targets(&document);
    let on_ready = {
        let window = window.clone();
        let document = document.clone();
        let params = params.clone();
        let targets = reveal_targets.clone();
        move || {
            reveal::reveal_pass(&window, &targets, params.reveal_fraction);
            report("typed", typed::start(&document, &params));
        }
    };
    report(
        "loader",
        loader::wire(&window, &document, params.loader_delay_ms, on_ready),
    );

    if !touch {
        report("cursor", cursor::wire(&document));
    }

    report("progress", navbar::wire_progress(&window, &document));
    report("navbar", navbar::wire_scrolled_class(&window, &document, &params));
    report("menu", navbar::wire_menu(&document));
    report("nav-highlight", navbar::wire_active_link(&window, &document, &params));
    report(
        "smooth-scroll",
        navbar::wire_smooth_scroll_fallback(&window, &document),
    );

    report("particles", particles::wire(&window, &document, &params));
    report("reveal", reveal::wire_reveal(&window, reveal_targets, &params));
    report("counters", reveal::wire_counters(&window, &document, &params));

    if !touch {
        report("tilt", events::wire_tilt(&document));
        report("magnetic", events::wire_magnetic(&document));
        report("spotlight", events::wire_spotlight(&document));
    }
    report("drag", drag::wire(&document));

    if let Some(year) = document.get_element_by_id(constants::YEAR_ID) {
        year.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));
    }

    report("konami", events::wire_konami(&document));
    Ok(())
}
