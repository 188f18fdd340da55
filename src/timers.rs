use site_core::TimerSlot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Interval,
    Once,
}

/// A browser timer that owns its callback and can be live at most once.
///
/// `start` cancels whatever this timer had scheduled before, so calling it
/// again (e.g. when the page becomes visible twice) never stacks intervals.
/// Dropping the timer cancels it.
pub struct ScopedTimer {
    label: &'static str,
    kind: Kind,
    period_ms: i32,
    slot: TimerSlot<i32>,
    callback: Closure<dyn FnMut()>,
}

impl ScopedTimer {
    pub fn interval(label: &'static str, period_ms: i32, callback: impl FnMut() + 'static) -> Self {
        Self::new(label, Kind::Interval, period_ms, callback)
    }

    pub fn once(label: &'static str, delay_ms: i32, callback: impl FnMut() + 'static) -> Self {
        Self::new(label, Kind::Once, delay_ms, callback)
    }

    fn new(label: &'static str, kind: Kind, period_ms: i32, callback: impl FnMut() + 'static) -> Self {
        Self {
            label,
            kind,
            period_ms,
            slot: TimerSlot::new(),
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
        }
    }

    pub fn start(&mut self) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let f = self.callback.as_ref().unchecked_ref();
        let handle = match self.kind {
            Kind::Interval => {
                window.set_interval_with_callback_and_timeout_and_arguments_0(f, self.period_ms)
            }
            Kind::Once => {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(f, self.period_ms)
            }
        }
        .map_err(|e| anyhow::anyhow!("{} timer: {:?}", self.label, e))?;
        let kind = self.kind;
        if self.slot.arm(handle, |old| cancel(&window, kind, old)) {
            log::debug!("[timer] {} restarted", self.label);
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(window) = web::window() {
            let kind = self.kind;
            self.slot.clear(|h| cancel(&window, kind, h));
        }
    }

    /// A one-shot timer that has run no longer needs cancelling.
    pub fn fired(&mut self) {
        self.slot.release();
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn cancel(window: &web::Window, kind: Kind, handle: i32) {
    match kind {
        Kind::Interval => window.clear_interval_with_handle(handle),
        Kind::Once => window.clear_timeout_with_handle(handle),
    }
}
