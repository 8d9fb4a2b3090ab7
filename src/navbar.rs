//! Navbar behavior: reading progress, scrolled styling, the mobile menu,
//! active-section highlighting and the smooth-scroll fallback.

use crate::constants::*;
use crate::dom;
use fx_core::{
    active_section, navbar_is_scrolled, scroll_progress_percent, FxParams, MenuEvent, MenuState,
    MenuTransition, SectionBounds,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_progress(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(bar) = dom::by_id::<web::HtmlElement>(document, SCROLL_PROGRESS_ID) else {
        log::debug!("[navbar] no #{}; progress bar disabled", SCROLL_PROGRESS_ID);
        return Ok(());
    };
    let win = window.clone();
    let doc = document.clone();
    dom::listen_passive(window, "scroll", move |_: web::Event| {
        let scroll_height = doc
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        let max_scroll = scroll_height - dom::viewport_height(&win);
        let percent = scroll_progress_percent(dom::scroll_y(&win), max_scroll);
        dom::set_style(&bar, "width", &format!("{}%", percent));
    })
}

pub fn wire_scrolled_class(
    window: &web::Window,
    document: &web::Document,
    params: &FxParams,
) -> anyhow::Result<()> {
    let Some(navbar) = document.get_element_by_id(NAVBAR_ID) else {
        log::debug!("[navbar] no #{}", NAVBAR_ID);
        return Ok(());
    };
    let threshold = params.navbar_threshold;
    let win = window.clone();
    dom::listen_passive(window, "scroll", move |_: web::Event| {
        let cl = navbar.class_list();
        if navbar_is_scrolled(dom::scroll_y(&win), threshold) {
            _ = cl.add_1(CLASS_SCROLLED);
        } else {
            _ = cl.remove_1(CLASS_SCROLLED);
        }
    })
}

#[derive(Clone)]
struct MenuParts {
    toggle: web::Element,
    links: web::Element,
    body: Option<web::HtmlElement>,
    state: Rc<RefCell<MenuState>>,
}

impl MenuParts {
    /// Feed `event` to the menu state and mirror any transition onto the DOM.
    fn apply(&self, event: MenuEvent) {
        let Some(transition) = self.state.borrow_mut().apply(event) else {
            return;
        };
        let opened = transition == MenuTransition::Opened;
        let set = |el: &web::Element, class: &str| {
            let cl = el.class_list();
            _ = if opened {
                cl.add_1(class)
            } else {
                cl.remove_1(class)
            };
        };
        set(&self.toggle, CLASS_OPEN);
        set(&self.links, CLASS_ACTIVE);
        if let Some(body) = &self.body {
            set(body.as_ref(), CLASS_MENU_OPEN);
        }
        log::debug!("[menu] {:?} on {:?}", transition, event);
    }

    fn contains_target(&self, ev: &web::Event) -> bool {
        let Some(node) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
            return false;
        };
        self.links.contains(Some(&node)) || self.toggle.contains(Some(&node))
    }
}

pub fn wire_menu(document: &web::Document) -> anyhow::Result<()> {
    let (Some(toggle), Some(links)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(NAV_LINKS_ID),
    ) else {
        log::debug!("[menu] no #{} / #{}; disabled", NAV_TOGGLE_ID, NAV_LINKS_ID);
        return Ok(());
    };
    let menu = MenuParts {
        toggle: toggle.clone(),
        links,
        body: document.body(),
        state: Rc::new(RefCell::new(MenuState::default())),
    };

    {
        let menu = menu.clone();
        dom::listen(&toggle, "click", move |ev: web::Event| {
            ev.stop_propagation();
            menu.apply(MenuEvent::TogglePressed);
        })?;
    }
    for link in dom::query_all::<web::Element>(document, NAV_LINK_SELECTOR) {
        let menu = menu.clone();
        dom::listen(&link, "click", move |_: web::Event| {
            menu.apply(MenuEvent::LinkClicked);
        })?;
    }
    {
        let menu = menu.clone();
        dom::listen(document, "click", move |ev: web::Event| {
            if !menu.contains_target(&ev) {
                menu.apply(MenuEvent::OutsideClick);
            }
        })?;
    }
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            menu.apply(MenuEvent::Escape);
        }
    })
}

pub fn wire_active_link(
    window: &web::Window,
    document: &web::Document,
    params: &FxParams,
) -> anyhow::Result<()> {
    let all_links: Vec<web::Element> = dom::query_all(document, NAV_LINK_SELECTOR);
    let tracked: Vec<(web::HtmlElement, web::Element)> =
        dom::query_all::<web::HtmlElement>(document, SECTION_SELECTOR)
            .into_iter()
            .filter_map(|section| {
                let id = section.id();
                let selector = format!("{}[href=\"#{}\"]", NAV_LINK_SELECTOR, id);
                let link = dom::query::<web::Element>(document, &selector)?;
                Some((section, link))
            })
            .collect();
    if tracked.is_empty() {
        log::debug!("[navbar] no linked sections; active highlight disabled");
        return Ok(());
    }

    let offset = params.nav_offset;
    let win = window.clone();
    dom::listen_passive(window, "scroll", move |_: web::Event| {
        let bounds: Vec<SectionBounds> = tracked
            .iter()
            .map(|(section, _)| SectionBounds {
                top: section.offset_top() as f64,
                height: section.offset_height() as f64,
            })
            .collect();
        if let Some(i) = active_section(&bounds, dom::scroll_y(&win), offset) {
            for link in &all_links {
                _ = link.class_list().remove_1(CLASS_ACTIVE);
            }
            _ = tracked[i].1.class_list().add_1(CLASS_ACTIVE);
        }
    })
}

/// Smooth in-page navigation for browsers without CSS `scroll-behavior`.
pub fn wire_smooth_scroll_fallback(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<()> {
    let supported = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| js_sys::Reflect::has(&el.style(), &"scrollBehavior".into()).unwrap_or(true))
        .unwrap_or(true);
    if supported {
        return Ok(());
    }
    log::info!("[navbar] scroll-behavior unsupported; using scrollTo fallback");

    for anchor in dom::query_all::<web::Element>(document, ANCHOR_SELECTOR) {
        let win = window.clone();
        let doc = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |ev: web::Event| {
            if href == "#" {
                return;
            }
            let Some(target) = dom::query::<web::HtmlElement>(&doc, &href) else {
                return;
            };
            ev.prevent_default();
            let nav_height = dom::by_id::<web::HtmlElement>(&doc, NAVBAR_ID)
                .map(|n| n.offset_height())
                .unwrap_or(0);
            let opts = web::ScrollToOptions::new();
            opts.set_top((target.offset_top() - nav_height) as f64);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        })?;
    }
    Ok(())
}
