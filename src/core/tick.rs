//! Per-frame update: input handling, physics, obstacle lifecycle, collisions.
//!
//! The core never touches audio, disk or the terminal. Everything the outside
//! world should react to comes back as [`SimEvent`]s, which
//! [`crate::sim_events`] maps to sounds, logs and high-score writes.

use super::physics::check_collision;
use super::state::{GameState, Simulation};
use super::transition::{transition, GameEvent, Transition};
use crate::constants::{FRAME_MS, MAX_FRAME_LAG_MS, OBSTACLE_WIDTH};
use rand::Rng;

/// Discrete inputs delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// One flap trigger per physical press.
    Flap,
    /// Stop the outer loop. Not part of simulation state.
    Quit,
    /// Any other key or button.
    Other,
}

/// Sounds the core asks for. Playback is fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Flap,
    GameOver,
}

/// Outcomes the caller should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Sound(SoundCue),
    /// A run began.
    RunStarted,
    /// A run ended with this score after `frames` simulated frames.
    RunEnded { score: u32, frames: u64 },
    /// The high score was beaten and should be persisted.
    HighScore(u32),
    /// The player cleared an obstacle.
    Scored(u32),
}

impl Simulation {
    /// Feeds one discrete input through the state machine.
    pub fn handle_input(&mut self, input: GameInput) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if input != GameInput::Flap {
            return events;
        }

        let (next, effect) = transition(self.state, GameEvent::Flap);
        self.state = next;
        match effect {
            Transition::Begin => events.push(SimEvent::RunStarted),
            Transition::Flap => {
                self.player.velocity = self.config.jump_strength;
                events.push(SimEvent::Sound(SoundCue::Flap));
            }
            Transition::Restart => self.reset_run(),
            Transition::Crash | Transition::Ignore => {}
        }
        events
    }

    /// Advances one frame. Does nothing outside `Playing`.
    ///
    /// Gravity is a flat per-frame increment; `dt_ms` only feeds the spawn
    /// timer. Drive this at a fixed 60 Hz (see [`Simulation::advance`]) to
    /// match the tuning of the default config.
    pub fn step<R: Rng>(&mut self, dt_ms: f64, rng: &mut R) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if self.state != GameState::Playing {
            return events;
        }
        self.frame_count += 1;

        // 1. Physics
        self.player.velocity += self.config.gravity;
        self.player.y += self.player.velocity;

        // 2. Spawn
        self.spawn_timer_ms += dt_ms;
        if self.spawn_timer_ms >= self.config.obstacle_interval as f64 {
            self.spawn_obstacle(rng);
            self.spawn_timer_ms = 0.0;
        }

        // 3. Scroll and score
        let speed = self.config.obstacle_speed;
        let player_x = self.player.x;
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
            if !obstacle.passed && obstacle.x < player_x {
                obstacle.passed = true;
                self.score += 1;
                events.push(SimEvent::Scored(self.score));
            }
        }

        // 4. Cull fully off-screen obstacles
        self.obstacles.retain(|o| o.x >= -OBSTACLE_WIDTH);

        // 5. Collision
        let gap = self.config.obstacle_gap as f64;
        if check_collision(&self.player, &self.obstacles, gap) {
            let (next, effect) = transition(self.state, GameEvent::Collision);
            self.state = next;
            if effect == Transition::Crash {
                self.finish_run(&mut events);
            }
        }

        events
    }

    /// Fixed-timestep driver: banks `elapsed_ms` of real time and runs as many
    /// 60 Hz frames as it covers.
    ///
    /// Elapsed time is capped so a stalled terminal cannot fast-forward the
    /// run. Outside `Playing` the bank is discarded.
    pub fn advance<R: Rng>(&mut self, elapsed_ms: f64, rng: &mut R) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if self.state != GameState::Playing {
            self.accumulated_time_ms = 0.0;
            return events;
        }

        self.accumulated_time_ms += elapsed_ms.clamp(0.0, MAX_FRAME_LAG_MS);
        while self.accumulated_time_ms >= FRAME_MS {
            self.accumulated_time_ms -= FRAME_MS;
            events.extend(self.step(FRAME_MS, rng));

            if self.state != GameState::Playing {
                self.accumulated_time_ms = 0.0;
                break;
            }
        }
        events
    }

    fn finish_run(&mut self, events: &mut Vec<SimEvent>) {
        events.push(SimEvent::Sound(SoundCue::GameOver));
        events.push(SimEvent::RunEnded {
            score: self.score,
            frames: self.frame_count,
        });
        if self.score > self.high_score {
            self.high_score = self.score;
            events.push(SimEvent::HighScore(self.high_score));
        }
    }
}
