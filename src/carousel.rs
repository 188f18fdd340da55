use crate::constants::*;
use crate::dom;
use crate::timers::ScopedTimer;
use site_core::{
    track_transform, CardCarousel, CardMetrics, CarouselConfig, CAROUSEL_TICK_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM handles shared by every carousel listener.
#[derive(Clone)]
pub struct CarouselWiring {
    pub container: web::Element,
    pub track: web::Element,
    /// Deep copies of the original cards, used to rebuild the track.
    pub templates: Rc<Vec<web::Node>>,
    pub state: Rc<RefCell<CardCarousel>>,
    pub autoscroll: Rc<RefCell<ScopedTimer>>,
    card_enter: Rc<Closure<dyn FnMut()>>,
    card_leave: Rc<Closure<dyn FnMut()>>,
}

impl CarouselWiring {
    /// Write the current offset to the track.
    pub fn apply(&self) {
        let offset = self.state.borrow().offset();
        dom::set_style(&self.track, "transform", &track_transform(offset));
    }

    /// Replace the track's children with the originals followed by their clones.
    pub fn rebuild_track(&self) {
        let slots = self.state.borrow().slot_count();
        self.track.set_inner_html("");
        let n = self.templates.len();
        if n == 0 {
            return;
        }
        for i in 0..slots {
            let Ok(node) = self.templates[i % n].clone_node_with_deep(true) else {
                continue;
            };
            if let Some(card) = node.dyn_ref::<web::Element>() {
                self.hook_card(card);
            }
            _ = self.track.append_child(&node);
        }
        log::info!("[carousel] track built: {} slots", slots);
    }

    fn hook_card(&self, card: &web::Element) {
        _ = card.add_event_listener_with_callback(
            "mouseenter",
            (*self.card_enter).as_ref().unchecked_ref(),
        );
        _ = card.add_event_listener_with_callback(
            "mouseleave",
            (*self.card_leave).as_ref().unchecked_ref(),
        );
    }

    fn remeasure(&self) {
        let metrics = measure_cards(&self.track, self.templates.len());
        self.state.borrow_mut().set_metrics(metrics);
    }
}

/// Card width plus computed right margin, read from the first card on the track.
fn measure_cards(track: &web::Element, count: usize) -> CardMetrics {
    let Some(first) = dom::query_all(track, TEAM_CARD_SELECTOR).into_iter().next() else {
        return CardMetrics::new(0.0, 0.0, count);
    };
    let width = first
        .dyn_ref::<web::HtmlElement>()
        .map(|h| h.offset_width() as f64)
        .unwrap_or(0.0);
    let margin = web::window()
        .and_then(|w| w.get_computed_style(&first).ok().flatten())
        .and_then(|style| style.get_property_value("margin-right").ok())
        .unwrap_or_default();
    match CardMetrics::from_css(width, &margin, count) {
        Ok(m) => m,
        Err(e) => {
            log::warn!("[carousel] {}; assuming no margin", e);
            CardMetrics::new(width, 0.0, count)
        }
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<Option<CarouselWiring>> {
    let (Some(container), Some(track)) = (
        dom::query(document, TEAM_CONTAINER_SELECTOR),
        dom::query(document, CARD_TRACK_SELECTOR),
    ) else {
        log::debug!("[carousel] no team section on this page");
        return Ok(None);
    };

    let originals = dom::query_all(&track, TEAM_CARD_SELECTOR);
    let templates: Vec<web::Node> = originals
        .iter()
        .filter_map(|c| c.clone_node_with_deep(true).ok())
        .collect();
    let metrics = measure_cards(&track, templates.len());
    let (viewport_w, _) = dom::viewport_size();
    let state = Rc::new(RefCell::new(CardCarousel::new(
        metrics,
        CarouselConfig::default(),
        viewport_w,
    )));
    log::info!(
        "[carousel] {} cards, reset bound {:.0}px",
        metrics.count,
        metrics.reset_bound()
    );

    let state_enter = state.clone();
    let card_enter = Closure::wrap(Box::new(move || {
        state_enter.borrow_mut().on_pointer_enter();
    }) as Box<dyn FnMut()>);
    let state_leave = state.clone();
    let container_leave = container.clone();
    let card_leave = Closure::wrap(Box::new(move || {
        let inside = container_leave.matches(":hover").unwrap_or(false);
        state_leave.borrow_mut().on_pointer_leave(inside);
    }) as Box<dyn FnMut()>);

    let track_tick = track.clone();
    let state_tick = state.clone();
    let autoscroll = ScopedTimer::interval("carousel", CAROUSEL_TICK_MS, move || {
        let mut s = state_tick.borrow_mut();
        if s.autoscroll_tick(dom::now_ms()) {
            dom::set_style(&track_tick, "transform", &track_transform(s.offset()));
        }
    });

    let wiring = CarouselWiring {
        container,
        track,
        templates: Rc::new(templates),
        state,
        autoscroll: Rc::new(RefCell::new(autoscroll)),
        card_enter: Rc::new(card_enter),
        card_leave: Rc::new(card_leave),
    };

    wiring.rebuild_track();
    wiring.apply();
    wire_container_hover(&wiring);
    crate::events::wire_carousel_input(&wiring);
    wire_visibility(&wiring, document);
    wire_resize(&wiring);
    wire_unload(&wiring);

    // a page opened in a background tab waits for visibilitychange
    let visible = !document.hidden();
    wiring.state.borrow_mut().set_page_visible(visible);
    if visible {
        wiring.autoscroll.borrow_mut().start()?;
    } else {
        log::debug!("[carousel] page hidden at load; autoscroll deferred");
    }
    Ok(Some(wiring))
}

fn wire_container_hover(w: &CarouselWiring) {
    let state = w.state.clone();
    dom::listen(&w.container, "mouseenter", move |_: web::Event| {
        state.borrow_mut().on_pointer_enter();
    });
    let state = w.state.clone();
    dom::listen(&w.container, "mouseleave", move |_: web::Event| {
        state.borrow_mut().on_pointer_leave(false);
    });
}

fn wire_visibility(w: &CarouselWiring, document: &web::Document) {
    let w = w.clone();
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_: web::Event| {
        let visible = !doc.hidden();
        w.state.borrow_mut().set_page_visible(visible);
        let mut timer = w.autoscroll.borrow_mut();
        if visible {
            if let Err(e) = timer.start() {
                log::error!("[carousel] {:?}", e);
            }
        } else {
            timer.stop();
        }
        log::debug!("[carousel] page visible={}", visible);
    });
}

fn wire_resize(w: &CarouselWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let (width, _) = dom::viewport_size();
        if w.state.borrow_mut().on_resize(width) {
            log::debug!("[carousel] layout {:?}", w.state.borrow().layout());
        }
        w.remeasure();
        w.apply();
    });
}

fn wire_unload(w: &CarouselWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let timer = w.autoscroll.clone();
    dom::listen(&window, "beforeunload", move |_: web::Event| {
        timer.borrow_mut().stop();
    });
}
