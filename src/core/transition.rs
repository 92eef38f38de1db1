//! Pure state-machine transitions.
//!
//! ```text
//! Start    --flap-->      Playing   (Begin)
//! Playing  --flap-->      Playing   (Flap)
//! Playing  --collision--> GameOver  (Crash)
//! GameOver --flap-->      Start     (Restart)
//! ```
//!
//! Anything else leaves the state untouched.

use super::state::GameState;

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A discrete flap trigger (one per physical press).
    Flap,
    /// The collision check hit something this frame.
    Collision,
}

/// Side effect the caller must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Run begins; no impulse on the starting press.
    Begin,
    /// Apply the jump impulse.
    Flap,
    /// Run ends; record the high score.
    Crash,
    /// Clear the finished run.
    Restart,
    Ignore,
}

/// Returns the next state and the effect to apply.
pub fn transition(state: GameState, event: GameEvent) -> (GameState, Transition) {
    match (state, event) {
        (GameState::Start, GameEvent::Flap) => (GameState::Playing, Transition::Begin),
        (GameState::Playing, GameEvent::Flap) => (GameState::Playing, Transition::Flap),
        (GameState::Playing, GameEvent::Collision) => (GameState::GameOver, Transition::Crash),
        (GameState::GameOver, GameEvent::Flap) => (GameState::Start, Transition::Restart),
        (state, _) => (state, Transition::Ignore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flap_from_start_begins() {
        assert_eq!(
            transition(GameState::Start, GameEvent::Flap),
            (GameState::Playing, Transition::Begin)
        );
    }

    #[test]
    fn test_flap_while_playing() {
        assert_eq!(
            transition(GameState::Playing, GameEvent::Flap),
            (GameState::Playing, Transition::Flap)
        );
    }

    #[test]
    fn test_collision_ends_run() {
        assert_eq!(
            transition(GameState::Playing, GameEvent::Collision),
            (GameState::GameOver, Transition::Crash)
        );
    }

    #[test]
    fn test_flap_after_game_over_restarts() {
        assert_eq!(
            transition(GameState::GameOver, GameEvent::Flap),
            (GameState::Start, Transition::Restart)
        );
    }

    #[test]
    fn test_collision_outside_play_is_ignored() {
        assert_eq!(
            transition(GameState::Start, GameEvent::Collision),
            (GameState::Start, Transition::Ignore)
        );
        assert_eq!(
            transition(GameState::GameOver, GameEvent::Collision),
            (GameState::GameOver, Transition::Ignore)
        );
    }
}
