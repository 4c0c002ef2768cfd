//! Audio collaborator interface.
//!
//! The core never plays sound itself. The runtime drains [`GameEvent`]s after
//! each tick or action and forwards them to an [`AudioSink`]. Sinks are
//! fire-and-forget: they swallow their own failures.

use crate::types::GameEvent;

pub trait AudioSink {
    /// Short cue when food is eaten.
    fn play_eat_cue(&mut self);

    /// Start (or restart) a randomly chosen ambient track.
    fn play_ambient_random_track(&mut self);

    /// Route a core event to the matching cue.
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started | GameEvent::Restarted => self.play_ambient_random_track(),
            GameEvent::AteFood { .. } => self.play_eat_cue(),
            GameEvent::GameOver { .. } => {}
        }
    }
}

/// Sink that drops every cue (`--mute`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_eat_cue(&mut self) {}

    fn play_ambient_random_track(&mut self) {}
}
