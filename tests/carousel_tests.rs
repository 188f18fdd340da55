// Host-side scenarios for the team carousel driven through its public API,
// the way the browser wiring drives it.

use site_core::{track_transform, CardCarousel, CardMetrics, CarouselConfig, Layout, Mode};

const DESKTOP: f64 = 1280.0;
const PHONE: f64 = 400.0;

// 5 cards of 200px plus a 20px margin: one pass is 1100px.
fn carousel(viewport: f64) -> CardCarousel {
    CardCarousel::new(CardMetrics::new(200.0, 20.0, 5), CarouselConfig::default(), viewport)
}

#[test]
fn autoscroll_wraps_to_start_after_one_pass() {
    let mut c = carousel(DESKTOP);
    c.set_offset(1099.0);
    assert!(c.autoscroll_tick(0.0));
    assert_eq!(c.offset(), 0.0);
    assert_eq!(track_transform(c.offset()), "translateX(-0px)");
}

#[test]
fn offset_stays_in_range_over_many_ticks() {
    let mut c = carousel(DESKTOP);
    for i in 0..5_000 {
        c.autoscroll_tick(i as f64 * 20.0);
        assert!(c.offset() >= 0.0 && c.offset() < c.reset_bound());
    }
}

#[test]
fn hover_then_wheel_then_leave() {
    let mut c = carousel(DESKTOP);
    c.on_pointer_enter();
    assert_eq!(c.mode(), Mode::HoverPaused);
    assert!(!c.autoscroll_tick(0.0));

    assert!(c.on_wheel(-10.0, 100.0));
    // wheeling backwards from 0 lands on the last pixel of the pass
    assert_eq!(c.offset(), 1099.0);
    assert_eq!(c.mode(), Mode::Wheel);

    c.on_pointer_leave(false);
    assert_eq!(c.mode(), Mode::Idle);
    assert!(c.autoscroll_tick(120.0));
}

#[test]
fn wheel_outside_the_carousel_is_not_consumed() {
    let mut c = carousel(DESKTOP);
    assert!(!c.on_wheel(50.0, 0.0));
    assert_eq!(c.offset(), 0.0);
}

#[test]
fn wheel_pause_expires_after_debounce() {
    let mut c = carousel(DESKTOP);
    c.on_pointer_enter();
    c.on_wheel(5.0, 1_000.0);
    c.on_pointer_leave(true);
    assert!(!c.autoscroll_tick(1_100.0));
    assert_eq!(c.mode(), Mode::Wheel);
    // still hovered, so the debounce ending only drops back to the hover pause
    c.autoscroll_tick(1_200.0);
    assert_eq!(c.mode(), Mode::HoverPaused);
}

#[test]
fn touch_drag_follows_finger_and_resumes_after_release() {
    let mut c = carousel(DESKTOP);
    c.on_touch_start(300.0);
    assert_eq!(c.mode(), Mode::Touch);
    assert!(c.on_touch_move(250.0));
    assert_eq!(c.offset(), 50.0);
    c.on_touch_end(500.0);
    assert!(!c.autoscroll_tick(600.0));
    assert!(c.autoscroll_tick(650.0));
    assert_eq!(c.mode(), Mode::Idle);
}

#[test]
fn new_touch_cancels_pending_release() {
    let mut c = carousel(DESKTOP);
    c.on_touch_start(100.0);
    c.on_touch_end(0.0);
    c.on_touch_start(100.0);
    assert!(!c.autoscroll_tick(1_000.0));
    assert_eq!(c.mode(), Mode::Touch);
}

#[test]
fn mouse_drag_is_desktop_only() {
    let mut c = carousel(PHONE);
    assert_eq!(c.layout(), Layout::Mobile);
    assert!(!c.on_mouse_down(10.0));

    let mut c = carousel(DESKTOP);
    assert!(c.on_mouse_down(400.0));
    assert!(c.on_mouse_move(390.0));
    assert_eq!(c.offset(), 20.0);
    c.on_mouse_up();
    assert_eq!(c.mode(), Mode::Idle);
}

#[test]
fn phone_width_idle_carousel_advances() {
    let mut c = carousel(PHONE);
    assert_eq!(c.layout(), Layout::Mobile);
    assert_eq!(c.slot_count(), 10);
    assert!(c.autoscroll_tick(0.0));
    assert!(c.offset() > 0.0);
    for i in 1..2_000 {
        c.autoscroll_tick(i as f64 * 20.0);
        assert!(c.offset() >= 0.0 && c.offset() < c.reset_bound());
    }
}

#[test]
fn phone_width_touch_drag_pauses_autoscroll() {
    let mut c = carousel(PHONE);
    c.on_touch_start(0.0);
    c.on_touch_move(-30.0);
    assert_eq!(c.offset(), 30.0);
    assert!(!c.autoscroll_tick(0.0));
}

#[test]
fn resize_across_breakpoint_keeps_the_clone_pass() {
    let mut c = carousel(DESKTOP);
    assert_eq!(c.slot_count(), 10);
    assert!(!c.on_resize(1024.0));
    assert!(c.on_resize(768.0));
    assert_eq!(c.layout(), Layout::Mobile);
    assert_eq!(c.slot_count(), 10);
    assert!(c.on_resize(769.0));
    assert_eq!(c.layout(), Layout::Desktop);
}

#[test]
fn hidden_page_stops_autoscroll() {
    let mut c = carousel(DESKTOP);
    c.set_page_visible(false);
    assert!(!c.autoscroll_tick(0.0));
    c.set_page_visible(true);
    assert!(c.autoscroll_tick(20.0));
}

#[test]
fn page_loaded_hidden_waits_for_visibility() {
    let mut c = carousel(DESKTOP);
    c.set_page_visible(false);
    for i in 0..10 {
        assert!(!c.autoscroll_tick(i as f64 * 20.0));
    }
    assert_eq!(c.offset(), 0.0);
    c.set_page_visible(true);
    assert!(c.autoscroll_tick(200.0));
}

#[test]
fn shrinking_cards_rewraps_offset() {
    let mut c = carousel(DESKTOP);
    c.set_offset(900.0);
    c.set_metrics(CardMetrics::new(100.0, 20.0, 5));
    assert_eq!(c.offset(), 0.0);
}
