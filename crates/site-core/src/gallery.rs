use crate::constants::GALLERY_STEP_PX;

/// Horizontal auto-scroll of the event photo strip.
///
/// The host runs a short interval while the pointer is away and feeds the
/// element's scroll metrics in; hovering cancels the interval.
#[derive(Clone, Copy, Debug)]
pub struct GalleryScroll {
    step: f64,
    hovered: bool,
}

impl Default for GalleryScroll {
    fn default() -> Self {
        Self::new(GALLERY_STEP_PX)
    }
}

impl GalleryScroll {
    pub fn new(step: f64) -> Self {
        Self {
            step,
            hovered: false,
        }
    }

    /// Next `scrollLeft`, looping to the start once the right edge is reached.
    pub fn next_scroll_left(&self, scroll_left: f64, client_width: f64, scroll_width: f64) -> f64 {
        let next = scroll_left + self.step;
        if next + client_width >= scroll_width {
            0.0
        } else {
            next
        }
    }

    /// Returns true when the running interval must be cancelled.
    pub fn on_enter(&mut self) -> bool {
        !std::mem::replace(&mut self.hovered, true)
    }

    /// Returns true when the interval must be armed again.
    pub fn on_leave(&mut self) -> bool {
        std::mem::replace(&mut self.hovered, false)
    }

    pub fn is_paused(&self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_right_then_loops() {
        let g = GalleryScroll::default();
        assert_eq!(g.next_scroll_left(0.0, 300.0, 1000.0), 1.0);
        assert_eq!(g.next_scroll_left(698.0, 300.0, 1000.0), 699.0);
        assert_eq!(g.next_scroll_left(699.0, 300.0, 1000.0), 0.0);
    }

    #[test]
    fn content_narrower_than_view_stays_put() {
        let g = GalleryScroll::default();
        assert_eq!(g.next_scroll_left(0.0, 500.0, 400.0), 0.0);
    }

    #[test]
    fn hover_pauses_once() {
        let mut g = GalleryScroll::default();
        assert!(g.on_enter());
        assert!(!g.on_enter());
        assert!(g.is_paused());
        assert!(g.on_leave());
        assert!(!g.on_leave());
    }
}
