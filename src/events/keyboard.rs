use crate::overlay;
use fx_core::KonamiDetector;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn handle_konami_keydown(
    ev: &web::KeyboardEvent,
    detector: &Rc<RefCell<KonamiDetector>>,
    document: &web::Document,
) {
    if !detector.borrow_mut().feed(&ev.code()) {
        return;
    }
    log::info!("[keys] konami sequence entered");
    if let Err(e) = overlay::show_easter_egg(document) {
        log::error!("[keys] easter egg failed: {:?}", e);
    }
}

pub fn wire_konami(document: &web::Document) -> anyhow::Result<()> {
    let detector = Rc::new(RefCell::new(KonamiDetector::default()));
    let doc = document.clone();
    crate::dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_konami_keydown(&ev, &detector, &doc);
    })
}
