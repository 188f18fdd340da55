/// Holds at most one live timer handle.
///
/// Arming a new handle cancels the previous one first, so re-running a setup
/// path can never leave two intervals driving the same animation.
#[derive(Debug)]
pub struct TimerSlot<H> {
    active: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<H> TimerSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle`, cancelling whatever was armed before.
    /// Returns true when a previous handle had to be cancelled.
    pub fn arm(&mut self, handle: H, cancel: impl FnOnce(H)) -> bool {
        let replaced = match self.active.take() {
            Some(old) => {
                cancel(old);
                true
            }
            None => false,
        };
        self.active = Some(handle);
        replaced
    }

    /// Cancel the armed handle, if any. Returns whether one was cancelled.
    pub fn clear(&mut self, cancel: impl FnOnce(H)) -> bool {
        match self.active.take() {
            Some(h) => {
                cancel(h);
                true
            }
            None => false,
        }
    }

    /// Forget the handle without cancelling it (one-shot timers that already fired).
    pub fn release(&mut self) -> Option<H> {
        self.active.take()
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.active.is_some()
    }

    pub fn handle(&self) -> Option<&H> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arming_twice_cancels_the_first_handle() {
        let mut slot = TimerSlot::new();
        let mut cancelled = Vec::new();
        assert!(!slot.arm(1, |h| cancelled.push(h)));
        assert!(slot.arm(2, |h| cancelled.push(h)));
        assert_eq!(cancelled, vec![1]);
        assert_eq!(slot.handle(), Some(&2));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut slot = TimerSlot::new();
        let mut cancelled = 0;
        slot.arm(7, |_| {});
        assert!(slot.clear(|_| cancelled += 1));
        assert!(!slot.clear(|_| cancelled += 1));
        assert_eq!(cancelled, 1);
        assert!(!slot.is_armed());
    }

    #[test]
    fn release_forgets_without_cancelling() {
        let mut slot = TimerSlot::new();
        slot.arm(3, |_| unreachable!());
        assert_eq!(slot.release(), Some(3));
        assert!(!slot.is_armed());
    }
}
