//! Skips redundant frames while nothing on screen is moving.

use crate::core::GameSnapshot;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Frames with live particles always render. A static frame renders when
    /// its fingerprint changed, otherwise at most once per
    /// `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let due = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if !is_static || changed || due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    pub fn should_render_snapshot(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        self.should_render(now_ms, snap.fingerprint(), snap.is_static())
    }

    /// Next call renders unconditionally (resize, terminal invalidated).
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}
