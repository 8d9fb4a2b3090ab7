use crate::constants::TYPED_ROLE_ID;
use crate::dom;
use fx_core::{FxParams, Typewriter};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn run_step(typewriter: Rc<RefCell<Typewriter>>, el: web::Element) {
    let step = typewriter.borrow_mut().step();
    el.set_text_content(Some(&step.text));
    let delay = step.delay_ms as i32;
    if let Err(e) = dom::set_timeout(delay, move || run_step(typewriter, el)) {
        log::warn!("[typed] stopped: {:?}", e);
    }
}

/// Start the endless role rotation in `#typedRole`.
pub fn start(document: &web::Document, params: &FxParams) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id(TYPED_ROLE_ID) else {
        log::debug!("[typed] no #{}; disabled", TYPED_ROLE_ID);
        return Ok(());
    };
    let typewriter = Typewriter::new(params.roles.iter().cloned())?;
    run_step(Rc::new(RefCell::new(typewriter)), el);
    Ok(())
}
