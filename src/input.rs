//! Maps terminal events to discrete game inputs.
//!
//! Releases and `Repeat` events never produce input. Terminals without the
//! kitty keyboard protocol report auto-repeat as plain presses, so
//! [`InputMapper`] also treats a flap key pressed again within [`REPEAT_GAP`]
//! of its last event as still held. A release, or a longer pause, arms it
//! again. Without release reporting the keyboard's initial repeat delay is
//! longer than the gap, so a long hold can still read as a second press.

use crate::core::tick::GameInput;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::{Duration, Instant};

/// Longest pause between two presses of one key that still counts as auto-repeat.
pub const REPEAT_GAP: Duration = Duration::from_millis(120);

/// Stateful mapper that turns one physical press into one flap.
#[derive(Debug, Default)]
pub struct InputMapper {
    held: Option<(KeyCode, Instant)>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one terminal event received at `now`.
    pub fn map(&mut self, event: &Event, now: Instant) -> Option<GameInput> {
        let Event::Key(key) = event else {
            return map_event(event);
        };

        match key.kind {
            KeyEventKind::Release => {
                if self.is_held_key(key.code) {
                    self.held = None;
                }
                None
            }
            KeyEventKind::Repeat => {
                if self.is_held_key(key.code) {
                    self.held = Some((key.code, now));
                }
                None
            }
            KeyEventKind::Press => {
                let input = map_key(key)?;
                if input != GameInput::Flap {
                    return Some(input);
                }
                let repeated = matches!(
                    self.held,
                    Some((code, last)) if code == key.code
                        && now.saturating_duration_since(last) <= REPEAT_GAP
                );
                self.held = Some((key.code, now));
                if repeated {
                    tracing::trace!(code = ?key.code, "auto-repeat dropped");
                    None
                } else {
                    Some(input)
                }
            }
        }
    }

    fn is_held_key(&self, code: KeyCode) -> bool {
        matches!(self.held, Some((held, _)) if held == code)
    }
}

/// Translate one terminal event with no memory of earlier ones.
/// `None` means the event carries no input.
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Flap,
        _ => GameInput::Other,
    };
    Some(input)
}

fn map_mouse(mouse: &MouseEvent) -> Option<GameInput> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(GameInput::Flap),
        _ => None,
    }
}
