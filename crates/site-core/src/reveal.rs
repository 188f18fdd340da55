//! Scroll-triggered reveal of the events and projects sections.

use crate::constants::REVEAL_RESET_TOP_PX;
use fnv::FnvHashSet;

/// Tracks which observed sections have been revealed and the last scroll
/// position, so scrolling back up near the top can replay the animation.
#[derive(Debug, Default)]
pub struct ScrollReveal {
    revealed: FnvHashSet<String>,
    last_scroll_top: f64,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time `section` intersects; the host then adds
    /// the reveal classes and stops observing the section.
    pub fn on_intersect(&mut self, section: &str, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        self.revealed.insert(section.to_string())
    }

    /// Returns true when every reveal should be undone and the sections
    /// observed again: the user is scrolling upward within the top band.
    pub fn on_scroll(&mut self, scroll_top: f64) -> bool {
        let reset = scroll_top < REVEAL_RESET_TOP_PX && self.last_scroll_top > scroll_top;
        self.last_scroll_top = scroll_top;
        if reset {
            self.revealed.clear();
        }
        reset
    }

    pub fn is_revealed(&self, section: &str) -> bool {
        self.revealed.contains(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_each_section_once() {
        let mut r = ScrollReveal::new();
        assert!(!r.on_intersect("events", false));
        assert!(r.on_intersect("events", true));
        assert!(!r.on_intersect("events", true));
        assert!(r.on_intersect("Projects", true));
        assert!(r.is_revealed("events"));
    }

    #[test]
    fn resets_only_when_scrolling_up_near_top() {
        let mut r = ScrollReveal::new();
        r.on_intersect("events", true);
        assert!(!r.on_scroll(50.0));
        assert!(!r.on_scroll(900.0));
        assert!(!r.on_scroll(300.0));
        assert!(r.is_revealed("events"));
        assert!(r.on_scroll(80.0));
        assert!(!r.is_revealed("events"));
        assert!(!r.on_scroll(90.0));
    }
}
