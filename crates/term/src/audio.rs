//! Terminal audio sink.
//!
//! A terminal has exactly one sound: the bell. The eat cue rings it; ambient
//! tracks are only chosen and logged so a richer backend can take over later.
//! Muted sessions use `core::NullAudio` instead.

use std::io::{self, Write};

use rand::Rng;

use crate::core::AudioSink;
use crate::types::AMBIENT_TRACK_COUNT;

#[derive(Debug)]
pub struct BellAudio<W: Write = io::Stdout> {
    out: W,
    current_track: Option<u32>,
    cues: u64,
}

impl BellAudio {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for BellAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> BellAudio<W> {
    /// Ring into an arbitrary writer instead of stdout.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            current_track: None,
            cues: 0,
        }
    }

    /// Index of the ambient track picked last, in `0..AMBIENT_TRACK_COUNT`.
    pub fn current_track(&self) -> Option<u32> {
        self.current_track
    }

    /// Number of eat cues rung.
    pub fn cues(&self) -> u64 {
        self.cues
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play_eat_cue(&mut self) {
        self.cues += 1;
        if let Err(err) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            log::debug!("bell failed: {err}");
        }
    }

    fn play_ambient_random_track(&mut self) {
        let track = rand::thread_rng().gen_range(0..AMBIENT_TRACK_COUNT);
        self.current_track = Some(track);
        log::info!("ambient track bgm{} of {}", track + 1, AMBIENT_TRACK_COUNT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, GameEvent};

    #[test]
    fn eat_cue_rings_bell_and_start_picks_track() {
        let mut audio = BellAudio::with_writer(Vec::new());
        audio.notify(&GameEvent::Started);
        let track = audio.current_track().unwrap();
        assert!(track < AMBIENT_TRACK_COUNT);
        assert!(audio.writer().is_empty());

        audio.notify(&GameEvent::AteFood {
            at: Cell::new(1, 1),
            score: 1,
        });
        assert_eq!(audio.cues(), 1);
        assert_eq!(audio.writer().as_slice(), b"\x07");
    }

    #[test]
    fn failing_writer_is_swallowed() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut audio = BellAudio::with_writer(Broken);
        audio.play_eat_cue();
        assert_eq!(audio.cues(), 1);
    }
}
