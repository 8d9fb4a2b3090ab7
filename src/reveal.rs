use crate::constants::*;
use crate::dom;
use crate::frame;
use fx_core::{is_in_trigger_zone, parse_count, CounterAnimation, CounterGate, FxParams};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn reveal_targets(document: &web::Document) -> Rc<Vec<web::Element>> {
    Rc::new(dom::query_all(document, REVEAL_SELECTOR))
}

/// Mark every target that has entered the viewport as visible.
pub fn reveal_pass(window: &web::Window, targets: &[web::Element], fraction: f64) {
    let vh = dom::viewport_height(window);
    for el in targets {
        if is_in_trigger_zone(el.get_bounding_client_rect().top(), vh, fraction) {
            _ = el.class_list().add_1(CLASS_VISIBLE);
        }
    }
}

pub fn wire_reveal(
    window: &web::Window,
    targets: Rc<Vec<web::Element>>,
    params: &FxParams,
) -> anyhow::Result<()> {
    if targets.is_empty() {
        return Ok(());
    }
    let fraction = params.reveal_fraction;
    let win = window.clone();
    dom::listen_passive(window, "scroll", move |_: web::Event| {
        reveal_pass(&win, &targets, fraction);
    })
}

fn start_counter(card: &web::Element, duration_ms: f64) {
    let raw = card.get_attribute(COUNT_ATTR).unwrap_or_default();
    let target = match parse_count(&raw) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("[counters] {}", e);
            return;
        }
    };
    let Ok(Some(number)) = card.query_selector(STAT_NUMBER_SELECTOR) else {
        return;
    };
    let mut anim = CounterAnimation::with_duration(target, duration_ms);
    frame::start_loop(move |timestamp| {
        let sample = anim.sample(timestamp);
        number.set_text_content(Some(&sample.value.to_string()));
        !sample.done
    });
}

/// Count the stat cards up the first time any of them scrolls into view.
pub fn wire_counters(
    window: &web::Window,
    document: &web::Document,
    params: &FxParams,
) -> anyhow::Result<()> {
    let cards: Vec<web::Element> = dom::query_all(document, STAT_CARD_SELECTOR);
    if cards.is_empty() {
        log::debug!("[counters] no {}; disabled", STAT_CARD_SELECTOR);
        return Ok(());
    }
    let gate = Rc::new(RefCell::new(CounterGate::default()));
    let fraction = params.counter_fraction;
    let duration_ms = params.counter_duration_ms;
    let win = window.clone();
    dom::listen_passive(window, "scroll", move |_: web::Event| {
        if gate.borrow().has_run() {
            return;
        }
        let tops: Vec<f64> = cards
            .iter()
            .map(|card| card.get_bounding_client_rect().top())
            .collect();
        let vh = dom::viewport_height(&win);
        let picked = gate.borrow_mut().select(&tops, vh, fraction);
        for i in picked {
            start_counter(&cards[i], duration_ms);
        }
    })
}
