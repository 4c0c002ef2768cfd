//! Fixed-tick / free-running-frame scheduler.
//!
//! Converts elapsed wall time into a [`Step`]: how many gameplay ticks are due
//! and whether a render frame is due. The scheduler itself does no work; the
//! caller runs the step with the ordering contract documented on [`Step`].

/// Catch-up limit: a stalled loop never replays more than this many ticks at once.
pub const MAX_CATCH_UP_TICKS: u32 = 4;

/// Work due after advancing the clock.
///
/// Ordering contract: all `ticks` run to completion first, then at most one
/// frame (particle advance + draw). Ticks and frames never interleave, so a
/// frame never observes a half-applied tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Step {
    pub ticks: u32,
    pub frame: bool,
}

impl Step {
    pub fn is_idle(&self) -> bool {
        self.ticks == 0 && !self.frame
    }
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    tick_interval_ms: u32,
    frame_interval_ms: u32,
    tick_acc_ms: u32,
    frame_acc_ms: u32,
    dropped_ticks: u64,
}

impl Scheduler {
    /// Build from rates in Hz; zero rates are treated as 1 Hz.
    pub fn new(tick_rate_hz: u32, frame_rate_hz: u32) -> Self {
        Self::with_intervals(
            1000 / tick_rate_hz.max(1),
            1000 / frame_rate_hz.max(1),
        )
    }

    pub fn with_intervals(tick_interval_ms: u32, frame_interval_ms: u32) -> Self {
        Self {
            tick_interval_ms: tick_interval_ms.max(1),
            frame_interval_ms: frame_interval_ms.max(1),
            tick_acc_ms: 0,
            frame_acc_ms: 0,
            dropped_ticks: 0,
        }
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn frame_interval_ms(&self) -> u32 {
        self.frame_interval_ms
    }

    /// Ticks skipped because the loop fell too far behind.
    pub fn dropped_ticks(&self) -> u64 {
        self.dropped_ticks
    }

    /// Advance the clock by `elapsed_ms` and report the work now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> Step {
        self.tick_acc_ms = self.tick_acc_ms.saturating_add(elapsed_ms);
        self.frame_acc_ms = self.frame_acc_ms.saturating_add(elapsed_ms);

        let due = self.tick_acc_ms / self.tick_interval_ms;
        self.tick_acc_ms %= self.tick_interval_ms;
        let ticks = due.min(MAX_CATCH_UP_TICKS);
        self.dropped_ticks += (due - ticks) as u64;

        // Missed frames are skipped, not replayed.
        let frame = self.frame_acc_ms >= self.frame_interval_ms;
        if frame {
            self.frame_acc_ms %= self.frame_interval_ms;
        }

        Step { ticks, frame }
    }

    /// Milliseconds until the next tick or frame is due.
    pub fn until_next_ms(&self) -> u32 {
        let tick = self.tick_interval_ms - self.tick_acc_ms;
        let frame = self.frame_interval_ms.saturating_sub(self.frame_acc_ms);
        tick.min(frame)
    }

    /// Forget accumulated time (e.g. after resuming from a pause).
    pub fn reset(&mut self) {
        self.tick_acc_ms = 0;
        self.frame_acc_ms = 0;
    }
}
