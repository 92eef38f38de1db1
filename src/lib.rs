//! Flappy Bob - a single-screen arcade game for the terminal.
//!
//! The library exposes the simulation core and the glue around it (config,
//! persistence, input mapping, audio cues, rendering) so it can be tested
//! without a terminal.

pub mod audio;
pub mod constants;
pub mod core;
pub mod input;
pub mod sim_events;
pub mod ui;
pub mod utils;

pub use crate::core::{GameConfig, GameInput, GameState, SimEvent, Simulation, SoundCue};
pub use utils::persistence::Storage;
