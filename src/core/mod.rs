//! Simulation core: state machine, physics, obstacles and collisions.
//!
//! Driven once per frame by an external loop. Nothing here blocks, touches
//! the filesystem or renders; see [`tick::SimEvent`] for how results leave
//! the core.

pub mod config;
pub mod physics;
pub mod state;
pub mod tick;
pub mod transition;

pub use config::*;
pub use state::*;
pub use tick::*;
pub use transition::*;
