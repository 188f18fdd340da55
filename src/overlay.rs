use crate::constants::*;
use crate::dom;
use crate::timers::ScopedTimer;
use site_core::{PreloadSignal, Preloader, PRELOADER_FADE_MS, PRELOADER_FALLBACK_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
fn hide(el: &web::Element) {
    dom::set_style(el, "display", "none");
}

/// Intro video overlay that fades out once the video ends, fails, or the
/// fallback timeout elapses.
#[derive(Clone)]
struct PreloaderWiring {
    overlay: web::Element,
    body: Option<web::HtmlElement>,
    state: Rc<RefCell<Preloader>>,
    fade: Rc<RefCell<Option<ScopedTimer>>>,
    fallback: Rc<RefCell<Option<ScopedTimer>>>,
}

impl PreloaderWiring {
    fn begin(&self, signal: PreloadSignal) {
        if !self.state.borrow_mut().signal(signal) {
            return;
        }
        dom::add_class(&self.overlay, CLASS_FADE_OUT);
        if let Some(t) = self.fallback.borrow_mut().as_mut() {
            t.stop();
        }
        let started = match self.fade.borrow_mut().as_mut() {
            Some(t) => t.start().map_err(|e| log::error!("[preloader] {:?}", e)).is_ok(),
            None => false,
        };
        if !started {
            self.finish();
        }
    }

    fn finish(&self) {
        if !self.state.borrow_mut().finish_fade() {
            return;
        }
        hide(&self.overlay);
        if let Some(body) = &self.body {
            dom::remove_class(body, CLASS_PRELOAD);
        }
        log::info!("[preloader] hidden");
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<bool> {
    let Some(overlay) = dom::query(document, PRELOADER_SELECTOR) else {
        log::debug!("[preloader] no preloader on this page");
        return Ok(false);
    };
    let body = document.body();
    if let Some(b) = &body {
        dom::add_class(b, CLASS_PRELOAD);
    }

    let w = PreloaderWiring {
        overlay,
        body,
        state: Rc::new(RefCell::new(Preloader::new())),
        fade: Rc::new(RefCell::new(None)),
        fallback: Rc::new(RefCell::new(None)),
    };

    let wf = w.clone();
    *w.fade.borrow_mut() = Some(ScopedTimer::once("preloader fade", PRELOADER_FADE_MS, move || {
        if let Some(t) = wf.fade.borrow_mut().as_mut() {
            t.fired();
        }
        wf.finish();
    }));
    let wt = w.clone();
    *w.fallback.borrow_mut() = Some(ScopedTimer::once(
        "preloader fallback",
        PRELOADER_FALLBACK_MS,
        move || {
            if let Some(t) = wt.fallback.borrow_mut().as_mut() {
                t.fired();
            }
            wt.begin(PreloadSignal::Timeout);
        },
    ));

    let video = document
        .get_element_by_id(PRELOADER_VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok());
    let Some(video) = video else {
        log::warn!("[preloader] #{} missing", PRELOADER_VIDEO_ID);
        w.begin(PreloadSignal::Error);
        return Ok(true);
    };

    let we = w.clone();
    dom::listen(&video, "ended", move |_: web::Event| we.begin(PreloadSignal::Ended));
    let wr = w.clone();
    dom::listen(&video, "error", move |_: web::Event| wr.begin(PreloadSignal::Error));

    if let Some(t) = w.fallback.borrow_mut().as_mut() {
        t.start()?;
    }

    match video.play() {
        Ok(promise) => spawn_local(async move {
            // autoplay may be refused; the fallback timeout still hides the overlay
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[preloader] play() rejected: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[preloader] play() failed: {:?}", e),
    }
    Ok(true)
}
