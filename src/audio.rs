//! Sound output for simulation cues.
//!
//! The terminal has no mixer, so the only real backend is the terminal bell.
//! Playback is fire-and-forget: sinks never report failure to the caller.

use crate::core::tick::SoundCue;
use std::io::Write;

/// Something that can play a [`SoundCue`].
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue. Used when sound is off.
#[derive(Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Rings the terminal bell: once for a flap, twice for game over.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) {
        let rings: &[u8] = match cue {
            SoundCue::Flap => b"\x07",
            SoundCue::GameOver => b"\x07\x07",
        };
        if let Err(e) = self.out.write_all(rings).and_then(|_| self.out.flush()) {
            tracing::debug!(error = %e, ?cue, "bell write failed");
        }
    }
}
