use crate::dom;
use crate::render::CanvasSurface;
use rand::rngs::StdRng;
use site_core::{ParticleField, TimerSlot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField<StdRng>,
    pub surface: CanvasSurface,
    raf: TimerSlot<i32>,
    running: bool,
}

impl FrameContext {
    pub fn new(field: ParticleField<StdRng>, surface: CanvasSurface) -> Self {
        Self {
            field,
            surface,
            raf: TimerSlot::new(),
            running: false,
        }
    }

    pub fn frame(&mut self) {
        self.field.frame(&mut self.surface);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field
            .on_resize(width as f32, height as f32, &mut self.surface);
    }

    /// Cancel the pending animation frame; the loop does not re-arm itself.
    pub fn stop(&mut self) {
        self.running = false;
        if let Some(w) = web::window() {
            self.raf.clear(|id| {
                _ = w.cancel_animation_frame(id);
            });
        }
    }
}

fn request_frame(frame_ctx: &Rc<RefCell<FrameContext>>, cb: &Closure<dyn FnMut()>) {
    let Some(w) = web::window() else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => {
            let mut ctx = frame_ctx.borrow_mut();
            // the previous id already fired, so there is nothing to cancel
            ctx.raf.release();
            ctx.raf.arm(id, |_| {});
        }
        Err(e) => log::error!("[particles] requestAnimationFrame failed: {:?}", e),
    }
}

/// Drive the particle field from `requestAnimationFrame` until stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    if frame_ctx.borrow().running {
        log::warn!("[particles] loop already running");
        return;
    }
    frame_ctx.borrow_mut().running = true;

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().running {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(&frame_ctx_tick, cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(&frame_ctx, cb);
    }
}

/// Cancel the pending frame when the page is torn down.
pub fn wire_unload(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let ctx = frame_ctx.clone();
    dom::listen(&window, "beforeunload", move |_: web::Event| {
        ctx.borrow_mut().stop();
        log::debug!("[particles] loop stopped");
    });
}

/// Keep the canvas covering the viewport; particles are regenerated on every resize.
pub fn wire_resize(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let ctx = frame_ctx.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let (w, h) = dom::viewport_size();
        ctx.borrow_mut().resize(w, h);
    });
}
