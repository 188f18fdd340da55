use crate::carousel::CarouselWiring;
use crate::constants::CLASS_ACTIVE;
use crate::dom;
use web_sys as web;

/// Manual carousel input: wheel and touch on the container, click-and-drag
/// on the track. Every handler feeds the shared offset and re-renders it.
pub fn wire_carousel_input(w: &CarouselWiring) {
    wire_wheel(w);
    wire_touch(w);
    wire_mouse_drag(w);
}

fn wire_wheel(w: &CarouselWiring) {
    let w = w.clone();
    let target = w.container.clone();
    dom::listen_active(&target, "wheel", move |ev: web::WheelEvent| {
        let consumed = w
            .state
            .borrow_mut()
            .on_wheel(ev.delta_y(), dom::now_ms());
        if consumed {
            ev.prevent_default();
            w.apply();
        }
    });
}

#[inline]
fn first_touch_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_x() as f64)
}

fn wire_touch(w: &CarouselWiring) {
    let ws = w.clone();
    dom::listen(&w.container, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            ws.state.borrow_mut().on_touch_start(x);
        }
    });

    let wm = w.clone();
    dom::listen_active(&w.container, "touchmove", move |ev: web::TouchEvent| {
        ev.prevent_default();
        let Some(x) = first_touch_x(&ev) else {
            return;
        };
        if wm.state.borrow_mut().on_touch_move(x) {
            wm.apply();
        }
    });

    let we = w.clone();
    dom::listen(&w.container, "touchend", move |_: web::TouchEvent| {
        we.state.borrow_mut().on_touch_end(dom::now_ms());
    });
}

fn wire_mouse_drag(w: &CarouselWiring) {
    let wd = w.clone();
    dom::listen(&w.track, "mousedown", move |ev: web::MouseEvent| {
        if wd.state.borrow_mut().on_mouse_down(ev.page_x() as f64) {
            dom::add_class(&wd.track, CLASS_ACTIVE);
            log::debug!("[carousel] drag start");
        }
    });

    let wm = w.clone();
    dom::listen(&w.track, "mousemove", move |ev: web::MouseEvent| {
        if wm.state.borrow_mut().on_mouse_move(ev.page_x() as f64) {
            ev.prevent_default();
            wm.apply();
        }
    });

    for event in ["mouseup", "mouseleave"] {
        let wu = w.clone();
        dom::listen(&w.track, event, move |_: web::MouseEvent| {
            wu.state.borrow_mut().on_mouse_up();
            dom::remove_class(&wu.track, CLASS_ACTIVE);
        });
    }
}
