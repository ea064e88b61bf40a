use std::time::{Duration, Instant};

/// Scroll notifications within this window collapse to a single evaluation.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(200);

/// Scroll positions within this many pixels of the document bottom count as
/// near-bottom and may trigger a batch load.
pub const NEAR_BOTTOM_PX: f64 = 500.0;

pub fn near_bottom(distance_to_bottom: f64) -> bool {
    distance_to_bottom <= NEAR_BOTTOM_PX
}

/// Trailing-edge debouncer over scroll notifications. The first event of a
/// burst arms the deadline; later events only replace the sample, so the
/// evaluation uses the most recent position. Instants are injected, so no
/// test has to sleep.
#[derive(Debug)]
pub struct ScrollDebouncer {
    window: Duration,
    deadline: Option<Instant>,
    sample: Option<f64>,
}

impl ScrollDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            sample: None,
        }
    }

    /// Records a scroll notification with its distance to the document
    /// bottom.
    pub fn observe(&mut self, now: Instant, distance_to_bottom: f64) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.window);
        }
        self.sample = Some(distance_to_bottom);
    }

    /// Returns the coalesced sample once the window has elapsed, re-arming
    /// the debouncer for the next burst.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.sample.take()
            }
            _ => None,
        }
    }
}
