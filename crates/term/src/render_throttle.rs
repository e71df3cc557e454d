//! Frame pacing for a mostly static screen.
//!
//! A memory board only changes on input or when a delay fires, so frames are
//! drawn when the scene fingerprint changes and otherwise at a slow idle
//! rate (which also repaints after terminal damage).

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last: None,
        }
    }

    /// Decide whether to draw a frame at `now_ms` for a scene with
    /// `fingerprint`.
    ///
    /// The first frame and every fingerprint change draw immediately; an
    /// unchanged scene redraws at most once per idle interval. `force`
    /// bypasses throttling (resize, bell).
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, force: bool) -> bool {
        let due = match self.last {
            None => true,
            Some((at, fp)) => {
                force
                    || fp != fingerprint
                    || now_ms.saturating_sub(at) >= self.idle_interval_ms
            }
        };
        if due {
            self.last = Some((now_ms, fingerprint));
        }
        due
    }

    /// Forget the last frame so the next call draws.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
