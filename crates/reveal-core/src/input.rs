use crate::constants::{DOUBLE_TAP_WINDOW, RESIZE_QUIET_PERIOD};
use std::time::Duration;

/// Flags a touch-end that follows the previous one too closely, so the host
/// can cancel the browser's double-tap zoom.
#[derive(Clone, Copy, Debug)]
pub struct TapGuard {
    window: Duration,
    last_touch_end: Option<Duration>,
}

impl Default for TapGuard {
    fn default() -> Self {
        Self::new(DOUBLE_TAP_WINDOW)
    }
}

impl TapGuard {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_touch_end: None,
        }
    }

    /// Record a touch-end at `now`; returns `true` when its default action
    /// should be prevented.
    pub fn touch_end(&mut self, now: Duration) -> bool {
        let suppress = self
            .last_touch_end
            .is_some_and(|last| now.saturating_sub(last) <= self.window);
        self.last_touch_end = Some(now);
        suppress
    }
}

/// Trailing-edge debounce: fires once after `quiet` has passed with no pokes.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    quiet: Duration,
    deadline: Option<Duration>,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(RESIZE_QUIET_PERIOD)
    }
}

impl Debounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Restart the quiet period.
    pub fn poke(&mut self, now: Duration) {
        self.deadline = Some(now + self.quiet);
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once per burst of pokes, when the quiet period
    /// has elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
