use crate::constants::IMAGE_GALLERY_SELECTOR;
use crate::dom;
use crate::timers::ScopedTimer;
use site_core::{GalleryScroll, GALLERY_TICK_MS};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<bool> {
    let Some(gallery) = dom::query(document, IMAGE_GALLERY_SELECTOR) else {
        return Ok(false);
    };
    let state = Rc::new(RefCell::new(GalleryScroll::default()));

    let el = gallery.clone();
    let state_tick = state.clone();
    let timer = Rc::new(RefCell::new(ScopedTimer::interval(
        "gallery",
        GALLERY_TICK_MS,
        move || {
            let next = state_tick.borrow().next_scroll_left(
                el.scroll_left() as f64,
                el.client_width() as f64,
                el.scroll_width() as f64,
            );
            el.scroll_to_with_x_and_y(next, el.scroll_top() as f64);
        },
    )));

    let state_enter = state.clone();
    let timer_enter = timer.clone();
    dom::listen(&gallery, "mouseenter", move |_: web::Event| {
        if state_enter.borrow_mut().on_enter() {
            timer_enter.borrow_mut().stop();
        }
    });
    let timer_leave = timer.clone();
    dom::listen(&gallery, "mouseleave", move |_: web::Event| {
        if state.borrow_mut().on_leave() {
            if let Err(e) = timer_leave.borrow_mut().start() {
                log::error!("[gallery] {:?}", e);
            }
        }
    });

    timer.borrow_mut().start()?;
    log::info!("[gallery] autoscroll started");
    Ok(true)
}
