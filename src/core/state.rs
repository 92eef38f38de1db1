//! Simulation data: game phase, player body, obstacles and the owning record.

use super::config::GameConfig;
use crate::constants::{PLAYER_START_Y, PLAYER_X, SCREEN_WIDTH};
use rand::Rng;

/// Which screen the game is on. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Waiting for the first flap.
    #[default]
    Start,
    Playing,
    /// Run ended; the next flap returns to `Start`.
    GameOver,
}

/// The player-controlled sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    /// Fixed horizontal position.
    pub x: f64,
    /// Top edge of the hitbox (screen coordinates, y grows downward).
    pub y: f64,
    /// Vertical velocity per frame (positive = downward).
    pub velocity: f64,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self {
            x: PLAYER_X,
            y: PLAYER_START_Y,
            velocity: 0.0,
        }
    }
}

/// A top/bottom pylon pair with a gap between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge; decreases every frame.
    pub x: f64,
    /// Height of the top pylon, i.e. where the gap starts.
    pub top_height: f64,
    /// Set once the obstacle crosses the player. Never reverts.
    pub passed: bool,
}

/// Everything the per-frame update touches.
///
/// Owned by the caller's loop and mutated only through `handle_input`
/// and `step` (see [`super::tick`]).
#[derive(Debug, Clone)]
pub struct Simulation {
    pub config: GameConfig,
    pub state: GameState,
    pub player: PlayerBody,
    /// Spawn order, which is also descending `x` order.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub high_score: u32,
    /// Milliseconds since the last spawn (or since the run started).
    ///
    /// Zeroed at the start of every run, so the first obstacle appears one
    /// full `obstacle_interval` into the run, never on its first frame.
    pub spawn_timer_ms: f64,
    /// Unconsumed real time for the fixed-step driver.
    pub accumulated_time_ms: f64,
    /// Physics frames stepped during the current run.
    pub frame_count: u64,
}

impl Simulation {
    /// Creates a simulation on the start screen.
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        Self {
            config,
            state: GameState::Start,
            player: PlayerBody::default(),
            obstacles: Vec::new(),
            score: 0,
            high_score,
            spawn_timer_ms: 0.0,
            accumulated_time_ms: 0.0,
            frame_count: 0,
        }
    }

    /// Puts the run back to its initial values. The high score survives.
    pub fn reset_run(&mut self) {
        self.player = PlayerBody::default();
        self.obstacles.clear();
        self.score = 0;
        self.spawn_timer_ms = 0.0;
        self.accumulated_time_ms = 0.0;
        self.frame_count = 0;
    }

    /// Appends an obstacle at the right screen edge with a random gap.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let (min, max) = self.config.gap_top_range();
        let top_height = rng.gen_range(min..=max);

        self.obstacles.push(Obstacle {
            x: SCREEN_WIDTH,
            top_height: top_height as f64,
            passed: false,
        });
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: self.state,
            player_y: self.player.y,
            velocity: self.player.velocity,
            obstacles: &self.obstacles,
            obstacle_gap: self.config.obstacle_gap as f64,
            score: self.score,
            high_score: self.high_score,
        }
    }
}

/// What a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub state: GameState,
    pub player_y: f64,
    pub velocity: f64,
    pub obstacles: &'a [Obstacle],
    pub obstacle_gap: f64,
    pub score: u32,
    pub high_score: u32,
}
