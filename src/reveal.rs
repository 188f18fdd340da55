use crate::constants::*;
use crate::dom;
use site_core::{ScrollReveal, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn reveal_section(section: &web::Element) {
    if let Ok(Some(title)) = section.query_selector(REVEAL_TITLE_SELECTOR) {
        dom::add_class(&title, CLASS_REVEAL);
    }
    for card in dom::query_all(section, REVEAL_CARDS_SELECTOR) {
        dom::add_class(&card, CLASS_REVEAL);
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<bool> {
    let sections = dom::query_all_in_document(document, REVEAL_SECTIONS_SELECTOR);
    if sections.is_empty() {
        log::debug!("[reveal] no sections to observe");
        return Ok(false);
    }
    let state = Rc::new(RefCell::new(ScrollReveal::new()));

    let state_cb = state.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let first = state_cb
                    .borrow_mut()
                    .on_intersect(&target.id(), entry.is_intersecting());
                if first {
                    reveal_section(&target);
                    observer.unobserve(&target);
                    log::debug!("[reveal] #{}", target.id());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver error: {:?}", e))?;
    callback.forget();
    for section in &sections {
        observer.observe(section);
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let doc = document.clone();
    let win = window.clone();
    dom::listen(&window, "scroll", move |_: web::Event| {
        let top = win.scroll_y().unwrap_or(0.0);
        if !state.borrow_mut().on_scroll(top) {
            return;
        }
        for el in dom::query_all_in_document(&doc, REVEALED_SELECTOR) {
            dom::remove_class(&el, CLASS_REVEAL);
        }
        for section in &sections {
            observer.observe(section);
        }
        log::debug!("[reveal] reset near top");
    });
    Ok(true)
}
