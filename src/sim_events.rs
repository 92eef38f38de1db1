//! Carries out [`SimEvent`]s returned by the simulation.
//!
//! This is where the pure core meets the audio sink, the high-score file and
//! the log.

use crate::audio::AudioSink;
use crate::core::tick::SimEvent;
use crate::utils::persistence::Storage;

pub fn apply_sim_events(events: &[SimEvent], audio: &mut dyn AudioSink, storage: &Storage) {
    for event in events {
        match *event {
            SimEvent::Sound(cue) => audio.play(cue),
            SimEvent::RunStarted => tracing::info!("run started"),
            SimEvent::Scored(score) => tracing::debug!(score, "obstacle cleared"),
            SimEvent::RunEnded { score, frames } => tracing::info!(score, frames, "run ended"),
            SimEvent::HighScore(score) => {
                // In-memory value stays authoritative if the write fails
                match storage.save_high_score(score) {
                    Ok(()) => tracing::info!(score, "new high score saved"),
                    Err(e) => tracing::warn!(
                        score,
                        error = %e,
                        path = %storage.high_score_path().display(),
                        "failed to save high score"
                    ),
                }
            }
        }
    }
}
