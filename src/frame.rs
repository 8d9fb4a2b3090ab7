use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame` from `requestAnimationFrame` until it returns `false`.
///
/// `frame` receives the rAF timestamp in milliseconds. A loop that stops keeps
/// its closure alive; loops are started a handful of times per page.
pub fn start_loop(mut frame: impl FnMut(f64) -> bool + 'static) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if frame(timestamp) {
            request(&tick_clone);
        }
    }) as Box<dyn FnMut(f64)>));
    request(&tick);
}
