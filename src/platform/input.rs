//! Keyboard and touch translation
//!
//! Raw key names and swipe deltas become calls on `Game`. Arrow keys steer
//! while playing and scrub the timeline while rewinding.

use crate::game::Game;
use crate::sim::{Direction, GamePhase};

/// Swipes shorter than this on both axes count as a tap
pub const TAP_THRESHOLD_PX: f32 = 10.0;
/// Scrub pulses sent by one horizontal swipe during rewind
pub const SWIPE_SCRUB_PULSES: i32 = 10;

/// What a key means, independent of game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    /// Start, pause toggle, or resume from rewind
    Primary,
    Pause,
    Restart,
}

/// Map a `KeyboardEvent.key` value
pub fn map_key(key: &str) -> Option<KeyAction> {
    let action = match key {
        "ArrowUp" | "w" | "W" => KeyAction::Steer(Direction::Up),
        "ArrowDown" | "s" | "S" => KeyAction::Steer(Direction::Down),
        "ArrowLeft" | "a" | "A" => KeyAction::Steer(Direction::Left),
        "ArrowRight" | "d" | "D" => KeyAction::Steer(Direction::Right),
        " " | "Enter" => KeyAction::Primary,
        "p" | "P" => KeyAction::Pause,
        "r" | "R" => KeyAction::Restart,
        _ => return None,
    };
    Some(action)
}

/// A completed touch gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Tap,
    Steer(Direction),
}

impl Swipe {
    /// Classify a touch from start to end delta (screen space, y down)
    pub fn classify(dx: f32, dy: f32) -> Self {
        if dx.abs() < TAP_THRESHOLD_PX && dy.abs() < TAP_THRESHOLD_PX {
            Swipe::Tap
        } else if dx.abs() > dy.abs() {
            Swipe::Steer(if dx > 0.0 { Direction::Right } else { Direction::Left })
        } else {
            Swipe::Steer(if dy > 0.0 { Direction::Down } else { Direction::Up })
        }
    }
}

/// Tracks held scrub keys between frames
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    back_held: bool,
    forward_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns true when the key was ours, so the
    /// browser default (page scroll) should be suppressed.
    pub fn key_down(&mut self, key: &str, game: &mut Game) -> bool {
        let Some(action) = map_key(key) else {
            return false;
        };
        match action {
            KeyAction::Steer(dir) => {
                match dir {
                    Direction::Left => self.back_held = true,
                    Direction::Right => self.forward_held = true,
                    _ => {}
                }
                if game.phase() == GamePhase::Rewind {
                    game.set_scrub_hold(self.scrub_delta());
                } else {
                    game.set_direction(dir);
                }
            }
            KeyAction::Primary => game.handle_primary_action(),
            KeyAction::Pause => game.toggle_pause(),
            KeyAction::Restart => game.request_full_restart(),
        }
        true
    }

    pub fn key_up(&mut self, key: &str, game: &mut Game) {
        match map_key(key) {
            Some(KeyAction::Steer(Direction::Left)) => self.back_held = false,
            Some(KeyAction::Steer(Direction::Right)) => self.forward_held = false,
            _ => return,
        }
        game.set_scrub_hold(self.scrub_delta());
    }

    pub fn swipe(&mut self, swipe: Swipe, game: &mut Game) {
        match (swipe, game.phase()) {
            (Swipe::Tap, _) => game.handle_primary_action(),
            (Swipe::Steer(Direction::Left), GamePhase::Rewind) => {
                game.scrub_rewind(-SWIPE_SCRUB_PULSES)
            }
            (Swipe::Steer(Direction::Right), GamePhase::Rewind) => {
                game.scrub_rewind(SWIPE_SCRUB_PULSES)
            }
            (Swipe::Steer(_), GamePhase::Rewind) => {}
            (Swipe::Steer(dir), _) => game.set_direction(dir),
        }
    }

    /// Net scrub direction of the held keys
    pub fn scrub_delta(&self) -> i32 {
        self.forward_held as i32 - self.back_held as i32
    }

    /// Push the held scrub keys into the game; call once per frame so a key
    /// still held when the snake dies starts scrubbing right away
    pub fn sync(&self, game: &mut Game) {
        if game.phase() == GamePhase::Rewind {
            game.set_scrub_hold(self.scrub_delta());
        }
    }
}
