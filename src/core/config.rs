//! Session tuning loaded from `config.json`.

use crate::constants::{GAP_MARGIN, SCREEN_HEIGHT};
use serde::{Deserialize, Serialize};
use std::io;

/// A named speed/interval preset.
///
/// Presets are stored in the config file and written back with the defaults,
/// but gameplay always runs on the top-level values in [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelPreset {
    pub name: String,
    pub obstacle_speed: f64,
    /// Milliseconds between spawns.
    pub obstacle_interval: u64,
}

/// Immutable-per-session physics and spawning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Velocity added every frame (positive = downward).
    pub gravity: f64,
    /// Velocity set on a flap (negative = upward).
    pub jump_strength: f64,
    /// Horizontal distance obstacles travel per frame.
    pub obstacle_speed: f64,
    /// Vertical size of the gap in each obstacle.
    pub obstacle_gap: u32,
    /// Milliseconds between spawns.
    pub obstacle_interval: u64,
    #[serde(default)]
    pub levels: Vec<LevelPreset>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_strength: -8.0,
            obstacle_speed: 3.0,
            obstacle_gap: 200,
            obstacle_interval: 2000,
            levels: vec![
                LevelPreset {
                    name: "Easy".to_string(),
                    obstacle_speed: 2.0,
                    obstacle_interval: 2500,
                },
                LevelPreset {
                    name: "Medium".to_string(),
                    obstacle_speed: 3.0,
                    obstacle_interval: 2000,
                },
                LevelPreset {
                    name: "Hard".to_string(),
                    obstacle_speed: 4.0,
                    obstacle_interval: 1500,
                },
            ],
        }
    }
}

impl GameConfig {
    /// Inclusive range the top of a new gap is drawn from.
    ///
    /// The upper bound never drops below the lower one, so an oversized gap
    /// degrades to a fixed position instead of an empty range.
    pub fn gap_top_range(&self) -> (u32, u32) {
        let min = GAP_MARGIN;
        let max = (SCREEN_HEIGHT as u32)
            .saturating_sub(GAP_MARGIN)
            .saturating_sub(self.obstacle_gap)
            .max(min);
        (min, max)
    }

    /// Rejects values the simulation cannot run on.
    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: String| Err(io::Error::new(io::ErrorKind::InvalidData, msg));

        if self.obstacle_gap == 0 {
            return invalid("obstacle_gap must be positive".to_string());
        }
        let max_gap = SCREEN_HEIGHT as u32 - 2 * GAP_MARGIN;
        if self.obstacle_gap > max_gap {
            return invalid(format!(
                "obstacle_gap {} leaves no room for obstacles (max {})",
                self.obstacle_gap, max_gap
            ));
        }
        if self.obstacle_interval == 0 {
            return invalid("obstacle_interval must be positive".to_string());
        }
        if self.obstacle_speed.is_nan() || self.obstacle_speed <= 0.0 {
            return invalid(format!(
                "obstacle_speed must be positive, got {}",
                self.obstacle_speed
            ));
        }
        if !self.gravity.is_finite() || !self.jump_strength.is_finite() {
            return invalid("gravity and jump_strength must be finite".to_string());
        }
        Ok(())
    }
}
