//! Intro video preloader.
//!
//! The overlay leaves through a fade whether the video finishes, fails to
//! load, or simply takes too long. Whichever signal arrives first wins; the
//! rest are ignored so the fade and the final hide happen exactly once.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderState {
    Playing,
    FadingOut,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadSignal {
    Ended,
    Error,
    /// The bounded wait ran out before the video reported anything.
    Timeout,
}

#[derive(Debug)]
pub struct Preloader {
    state: PreloaderState,
    finished_by: Option<PreloadSignal>,
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Preloader {
    pub fn new() -> Self {
        Self {
            state: PreloaderState::Playing,
            finished_by: None,
        }
    }

    pub fn state(&self) -> PreloaderState {
        self.state
    }

    /// Which signal started the fade, once one has.
    pub fn finished_by(&self) -> Option<PreloadSignal> {
        self.finished_by
    }

    /// Returns true when this signal starts the fade-out.
    pub fn signal(&mut self, signal: PreloadSignal) -> bool {
        if self.state != PreloaderState::Playing {
            log::debug!("[preloader] ignoring {:?} in {:?}", signal, self.state);
            return false;
        }
        self.state = PreloaderState::FadingOut;
        self.finished_by = Some(signal);
        match signal {
            PreloadSignal::Ended => log::info!("[preloader] video ended"),
            PreloadSignal::Error => log::warn!("[preloader] video failed to load"),
            PreloadSignal::Timeout => log::warn!("[preloader] fallback timeout reached"),
        }
        true
    }

    /// Fade transition finished. Returns true when the overlay should now be removed.
    pub fn finish_fade(&mut self) -> bool {
        if self.state != PreloaderState::FadingOut {
            return false;
        }
        self.state = PreloaderState::Hidden;
        true
    }

    pub fn is_hidden(&self) -> bool {
        self.state == PreloaderState::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ended_fades_then_hides() {
        let mut p = Preloader::new();
        assert!(p.signal(PreloadSignal::Ended));
        assert_eq!(p.state(), PreloaderState::FadingOut);
        assert!(p.finish_fade());
        assert!(p.is_hidden());
    }

    #[test]
    fn timeout_forces_completion_once() {
        let mut p = Preloader::new();
        assert!(p.signal(PreloadSignal::Timeout));
        assert!(!p.signal(PreloadSignal::Timeout));
        assert!(p.finish_fade());
        assert!(!p.finish_fade());
        assert_eq!(p.finished_by(), Some(PreloadSignal::Timeout));
    }

    #[test]
    fn late_signals_are_ignored() {
        let mut p = Preloader::new();
        assert!(p.signal(PreloadSignal::Error));
        assert!(!p.signal(PreloadSignal::Ended));
        assert!(!p.signal(PreloadSignal::Timeout));
        assert_eq!(p.finished_by(), Some(PreloadSignal::Error));
    }

    #[test]
    fn finish_before_any_signal_does_nothing() {
        let mut p = Preloader::new();
        assert!(!p.finish_fade());
        assert_eq!(p.state(), PreloaderState::Playing);
    }
}
