use std::time::{Duration, Instant};

/// Soft rate limit between simulation ticks.
///
/// The scene loop polls much faster than the snake moves; each frame asks
/// `ready` and gets true only once the current move delay has elapsed since
/// the last granted tick. A false answer means the frame is a no-op for the
/// simulation. The delay is passed in per call because eating shortens it
/// while a game is running.
#[derive(Debug)]
pub struct MoveTimer {
    last_advance: Instant,
}

impl MoveTimer {
    pub fn new() -> Self {
        Self {
            last_advance: Instant::now(),
        }
    }

    /// Re-arm from `now`, e.g. when a restart swaps in a fresh session.
    pub fn restart_at(&mut self, now: Instant) {
        self.last_advance = now;
    }

    pub fn ready(&mut self, delay: Duration) -> bool {
        self.ready_at(Instant::now(), delay)
    }

    fn ready_at(&mut self, now: Instant, delay: Duration) -> bool {
        if now.duration_since(self.last_advance) >= delay {
            self.last_advance = now;
            true
        } else {
            false
        }
    }
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self::new()
    }
}
