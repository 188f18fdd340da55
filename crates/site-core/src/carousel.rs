//! Infinite team-card carousel.
//!
//! Every way of moving the strip (autoscroll timer, wheel, touch drag, mouse
//! drag) feeds the same scroll offset, which the host renders as a
//! `translateX` on the card track. The offset is kept in `[0, reset_bound)`
//! where `reset_bound` is the width of one pass over the original cards; the
//! track holds a clone of every card after the originals so jumping back to 0
//! is invisible at any viewport width.
//!
//! Timestamps are host milliseconds (`performance.now()` in the browser).
//! Debounce windows are stored as deadlines and resolved on the next tick or
//! input, so the state machine never needs its own timers.

use crate::constants::{
    CAROUSEL_SPEED_PX, MOBILE_BREAKPOINT_PX, MOUSE_DRAG_MULTIPLIER, TOUCH_RELEASE_MS,
    WHEEL_DEBOUNCE_MS, WHEEL_MULTIPLIER,
};
use crate::layout::CardMetrics;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    HoverPaused,
    Wheel,
    Touch,
    MouseDrag,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Wide viewport; click-and-drag is available.
    Desktop,
    /// Narrow viewport; no mouse drag.
    Mobile,
}

impl Layout {
    pub fn for_width(viewport_width: f64, breakpoint: f64) -> Self {
        if viewport_width > breakpoint {
            Layout::Desktop
        } else {
            Layout::Mobile
        }
    }
}

#[derive(Clone, Debug)]
pub struct CarouselConfig {
    pub speed: f64,
    pub wheel_multiplier: f64,
    pub wheel_debounce_ms: f64,
    pub touch_release_ms: f64,
    pub drag_multiplier: f64,
    pub breakpoint: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            speed: CAROUSEL_SPEED_PX,
            wheel_multiplier: WHEEL_MULTIPLIER,
            wheel_debounce_ms: WHEEL_DEBOUNCE_MS,
            touch_release_ms: TOUCH_RELEASE_MS,
            drag_multiplier: MOUSE_DRAG_MULTIPLIER,
            breakpoint: MOBILE_BREAKPOINT_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Manual {
    Wheel,
    Touch,
    MouseDrag,
}

// Where a drag started, re-anchored whenever the offset wraps mid-drag.
#[derive(Clone, Copy, Debug)]
struct Anchor {
    start_x: f64,
    start_offset: f64,
}

pub struct CardCarousel {
    config: CarouselConfig,
    metrics: CardMetrics,
    layout: Layout,
    offset: f64,
    hovered: bool,
    manual: Option<Manual>,
    anchor: Option<Anchor>,
    wheel_until: Option<f64>,
    release_at: Option<f64>,
    page_visible: bool,
}

impl CardCarousel {
    pub fn new(metrics: CardMetrics, config: CarouselConfig, viewport_width: f64) -> Self {
        let layout = Layout::for_width(viewport_width, config.breakpoint);
        Self {
            config,
            metrics,
            layout,
            offset: 0.0,
            hovered: false,
            manual: None,
            anchor: None,
            wheel_until: None,
            release_at: None,
            page_visible: true,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Single sink for every offset producer; applies the wrap rule.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = self.wrap(offset);
    }

    pub fn reset_bound(&self) -> f64 {
        self.metrics.reset_bound()
    }

    pub fn metrics(&self) -> CardMetrics {
        self.metrics
    }

    /// Card sizes change with the stylesheet; re-wrap into the new bound.
    pub fn set_metrics(&mut self, metrics: CardMetrics) {
        self.metrics = metrics;
        self.offset = self.wrap(self.offset);
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Originals followed by one clone each.
    pub fn slot_count(&self) -> usize {
        self.metrics.count * 2
    }

    pub fn is_page_visible(&self) -> bool {
        self.page_visible
    }

    pub fn mode(&self) -> Mode {
        match self.manual {
            Some(Manual::Touch) => Mode::Touch,
            Some(Manual::MouseDrag) => Mode::MouseDrag,
            Some(Manual::Wheel) => Mode::Wheel,
            None if self.hovered => Mode::HoverPaused,
            None => Mode::Idle,
        }
    }

    // offset >= max jumps to the start, offset < 0 jumps to the last pixel.
    fn wrap(&self, offset: f64) -> f64 {
        let max = self.reset_bound();
        if max <= 0.0 || !offset.is_finite() {
            return 0.0;
        }
        if offset >= max {
            0.0
        } else if offset < 0.0 {
            (max - 1.0).max(0.0)
        } else {
            offset
        }
    }

    fn expire(&mut self, now_ms: f64) {
        if let Some(until) = self.wheel_until {
            if now_ms >= until {
                self.wheel_until = None;
                if self.manual == Some(Manual::Wheel) {
                    self.manual = None;
                }
            }
        }
        if let Some(at) = self.release_at {
            if now_ms >= at {
                self.release_at = None;
                self.hovered = false;
                if self.manual == Some(Manual::Touch) {
                    self.manual = None;
                }
            }
        }
    }

    /// Fixed-period autoscroll step. Returns true when the offset moved.
    pub fn autoscroll_tick(&mut self, now_ms: f64) -> bool {
        self.expire(now_ms);
        if self.hovered
            || self.manual.is_some()
            || !self.page_visible
            || self.reset_bound() <= 0.0
        {
            return false;
        }
        self.offset += self.config.speed;
        if self.offset >= self.reset_bound() {
            self.offset = 0.0;
        }
        true
    }

    /// Pointer entered the container or any card.
    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the container or a card. `still_inside` is whether it is
    /// still over the container; leaving a card for the gap between cards
    /// keeps the carousel paused.
    pub fn on_pointer_leave(&mut self, still_inside: bool) {
        if still_inside {
            return;
        }
        self.hovered = false;
        self.wheel_until = None;
        if matches!(self.manual, Some(Manual::Wheel) | Some(Manual::MouseDrag)) {
            self.manual = None;
            self.anchor = None;
        }
    }

    /// Returns true when the wheel was consumed and the page must not scroll.
    pub fn on_wheel(&mut self, delta_y: f64, now_ms: f64) -> bool {
        self.expire(now_ms);
        if !self.hovered || self.reset_bound() <= 0.0 {
            return false;
        }
        if self.manual.is_none() {
            self.manual = Some(Manual::Wheel);
        }
        self.set_offset(self.offset + delta_y * self.config.wheel_multiplier);
        self.wheel_until = Some(now_ms + self.config.wheel_debounce_ms);
        true
    }

    pub fn on_touch_start(&mut self, x: f64) {
        self.release_at = None;
        self.hovered = true;
        self.manual = Some(Manual::Touch);
        self.anchor = Some(Anchor {
            start_x: x,
            start_offset: self.offset,
        });
    }

    /// Returns true when the offset was driven by the touch.
    pub fn on_touch_move(&mut self, x: f64) -> bool {
        if self.manual != Some(Manual::Touch) {
            return false;
        }
        let Some(anchor) = self.anchor else {
            return false;
        };
        let raw = anchor.start_offset + (anchor.start_x - x);
        self.drag_to(raw, x);
        true
    }

    pub fn on_touch_end(&mut self, now_ms: f64) {
        if self.manual == Some(Manual::Touch) {
            self.anchor = None;
            self.release_at = Some(now_ms + self.config.touch_release_ms);
        }
    }

    /// Desktop click-and-drag. Returns false on the mobile layout.
    pub fn on_mouse_down(&mut self, x: f64) -> bool {
        if self.layout != Layout::Desktop || self.manual == Some(Manual::Touch) {
            return false;
        }
        self.manual = Some(Manual::MouseDrag);
        self.wheel_until = None;
        self.anchor = Some(Anchor {
            start_x: x,
            start_offset: self.offset,
        });
        true
    }

    pub fn on_mouse_move(&mut self, x: f64) -> bool {
        if self.manual != Some(Manual::MouseDrag) {
            return false;
        }
        let Some(anchor) = self.anchor else {
            return false;
        };
        let raw = anchor.start_offset - (x - anchor.start_x) * self.config.drag_multiplier;
        self.drag_to(raw, x);
        true
    }

    pub fn on_mouse_up(&mut self) {
        if self.manual == Some(Manual::MouseDrag) {
            self.manual = None;
            self.anchor = None;
        }
    }

    fn drag_to(&mut self, raw: f64, x: f64) {
        let wrapped = self.wrap(raw);
        if wrapped != raw {
            self.anchor = Some(Anchor {
                start_x: x,
                start_offset: wrapped,
            });
        }
        self.offset = wrapped;
    }

    pub fn set_page_visible(&mut self, visible: bool) {
        self.page_visible = visible;
    }

    /// Returns true when the layout flipped across the breakpoint.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        let next = Layout::for_width(viewport_width, self.config.breakpoint);
        if next == self.layout {
            return false;
        }
        self.layout = next;
        if next == Layout::Mobile && self.manual == Some(Manual::MouseDrag) {
            self.manual = None;
            self.anchor = None;
        }
        true
    }
}

/// CSS transform that renders `offset` on the track.
pub fn track_transform(offset: f64) -> String {
    format!("translateX(-{}px)", offset)
}
