//! Single-threaded driver that owns a game session.
//!
//! `GameLoop` couples a [`GameState`] with its [`Scheduler`] and an
//! [`AudioSink`]. Input actions and clock advances both go through it, so
//! core events reach the audio collaborator in the order they happened.

use log::debug;

use crate::core::{AudioSink, GameSnapshot, GameState, RandomSource};
use crate::schedule::{Scheduler, Step};
use crate::types::{GameAction, GamePhase};

pub struct GameLoop<R: RandomSource, A: AudioSink> {
    state: GameState<R>,
    scheduler: Scheduler,
    audio: A,
}

impl<R: RandomSource, A: AudioSink> GameLoop<R, A> {
    pub fn new(state: GameState<R>, scheduler: Scheduler, audio: A) -> Self {
        Self {
            state,
            scheduler,
            audio,
        }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        self.state.snapshot()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Apply an input action between steps.
    pub fn handle(&mut self, action: GameAction) -> bool {
        let was_paused = self.state.phase() == GamePhase::Paused;
        let applied = self.state.apply_action(action);
        if applied {
            debug!("action {} -> {}", action.as_str(), self.state.phase().as_str());
        }
        // Resuming starts a fresh tick interval instead of firing immediately.
        if was_paused && self.state.phase() == GamePhase::Playing {
            self.scheduler.reset();
        }
        self.flush_events();
        applied
    }

    /// Advance the clock and run whatever is due: ticks first, then the frame.
    pub fn advance(&mut self, elapsed_ms: u32) -> Step {
        let step = self.scheduler.advance(elapsed_ms);
        self.run(step);
        step
    }

    /// Run a step under the ordering contract of [`Step`].
    pub fn run(&mut self, step: Step) {
        for _ in 0..step.ticks {
            self.state.tick();
            self.flush_events();
        }
        if step.frame {
            self.state.advance_frame();
        }
    }

    pub fn until_next_ms(&self) -> u32 {
        self.scheduler.until_next_ms()
    }

    fn flush_events(&mut self) {
        for event in self.state.drain_events() {
            self.audio.notify(&event);
        }
    }
}
