#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{ParticleConfig, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
mod contact;
mod dom;
mod event_page;
mod events;
mod frame;
mod gallery;
mod info_cards;
mod menu;
mod overlay;
mod reveal;
mod render;
mod timers;

/// Full-viewport particle backdrop. Pages without the canvas skip it.
fn init_particles(document: &web::Document) -> anyhow::Result<bool> {
    let Some(el) = document.get_element_by_id(constants::PARTICLE_CANVAS_ID) else {
        log::debug!("[particles] no #{} on this page", constants::PARTICLE_CANVAS_ID);
        return Ok(false);
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let surface = render::CanvasSurface::new(canvas)?;
    let field = ParticleField::new(ParticleConfig::default(), StdRng::from_entropy());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(field, surface)));
    let (w, h) = dom::viewport_size();
    frame_ctx.borrow_mut().resize(w, h);
    log::info!(
        "[particles] {} particles in {:.0}x{:.0}",
        frame_ctx.borrow().field.particles().len(),
        w,
        h
    );
    frame::wire_resize(&frame_ctx);
    frame::wire_unload(&frame_ctx);
    frame::start_loop(frame_ctx);
    Ok(true)
}

fn report(widget: &str, result: anyhow::Result<bool>) {
    match result {
        Ok(true) => log::debug!("[{}] ready", widget),
        Ok(false) => {}
        Err(e) => log::error!("[{}] init failed: {:?}", widget, e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // One widget failing to wire must not take the rest of the page down.
    report("preloader", overlay::init(&document));
    report("particles", init_particles(&document));
    report("menu", Ok(menu::init(&document)));
    report("carousel", carousel::init(&document).map(|w| w.is_some()));
    report("reveal", reveal::init(&document));
    report("contact", Ok(contact::init(&document)));
    // event details fill the image gallery, so they go before its autoscroll
    report("event", event_page::init(&document));
    report("gallery", gallery::init(&document));
    let cards = info_cards::init(&document);
    if cards > 0 {
        log::debug!("[info] {} hover cards", cards);
    }
    Ok(())
}
