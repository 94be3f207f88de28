//! Player input
//!
//! Held controls are a fixed boolean set written by the host between frames.
//! Discrete actions (pause, restart, menu buttons) arrive as one-shot
//! [`Command`]s and are resolved by the phase machine at the top of a tick.

use serde::{Deserialize, Serialize};

/// Held controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    /// Time drift modifier
    Drift,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Up,
        Control::Down,
        Control::Left,
        Control::Right,
        Control::Drift,
    ];

    fn index(self) -> usize {
        match self {
            Control::Up => 0,
            Control::Down => 1,
            Control::Left => 2,
            Control::Right => 3,
            Control::Drift => 4,
        }
    }

    /// Map a browser `KeyboardEvent.code` to a control
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Control::Up),
            "ArrowDown" => Some(Control::Down),
            "ArrowLeft" => Some(Control::Left),
            "ArrowRight" => Some(Control::Right),
            "Space" => Some(Control::Drift),
            _ => None,
        }
    }
}

/// One-shot actions derived from key/pointer events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Escape: Playing <-> Paused
    TogglePause,
    /// Pause if playing, otherwise nothing (focus loss)
    Pause,
    /// Start a fresh run after a crash
    Restart,
    /// "Play" button on the start screen
    SelectPlay,
    /// "Instructions" button on the start screen
    SelectInstructions,
    /// "Back" button on the instructions screen
    SelectBack,
    /// Bare click (simplified variant): does whatever the current screen offers
    Click,
}

impl Command {
    /// Map a browser `KeyboardEvent.code` to a command
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "Escape" => Some(Command::TogglePause),
            _ => None,
        }
    }
}

/// Held/released state for every [`Control`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    held: [bool; 5],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a set of held controls
    pub fn with(controls: &[Control]) -> Self {
        let mut state = Self::default();
        for &control in controls {
            state.press(control);
        }
        state
    }

    pub fn set(&mut self, control: Control, held: bool) {
        self.held[control.index()] = held;
    }

    pub fn press(&mut self, control: Control) {
        self.set(control, true);
    }

    pub fn release(&mut self, control: Control) {
        self.set(control, false);
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    /// Release everything (e.g. window lost focus)
    pub fn clear(&mut self) {
        self.held = [false; 5];
    }

    /// Drift held while steering sideways: obstacles slow down
    pub fn is_drifting(&self) -> bool {
        self.is_held(Control::Drift)
            && (self.is_held(Control::Left) || self.is_held(Control::Right))
    }
}

/// Everything the host hands to a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held controls as of this frame
    pub held: InputState,
    /// One-shot commands delivered since the previous frame, in order
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn held(held: InputState) -> Self {
        Self {
            held,
            commands: Vec::new(),
        }
    }

    pub fn command(command: Command) -> Self {
        Self {
            held: InputState::default(),
            commands: vec![command],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_is_total() {
        let mut input = InputState::new();
        for control in Control::ALL {
            assert!(!input.is_held(control));
            input.press(control);
            assert!(input.is_held(control));
        }
        input.clear();
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_drifting_needs_lateral_input() {
        let mut input = InputState::with(&[Control::Drift]);
        assert!(!input.is_drifting());

        input.press(Control::Up);
        assert!(!input.is_drifting());

        input.press(Control::Right);
        assert!(input.is_drifting());

        input.release(Control::Drift);
        assert!(!input.is_drifting());
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Control::from_key_code("Space"), Some(Control::Drift));
        assert_eq!(Control::from_key_code("ArrowLeft"), Some(Control::Left));
        assert_eq!(Control::from_key_code("KeyA"), None);
        assert_eq!(Command::from_key_code("Escape"), Some(Command::TogglePause));
        assert_eq!(Command::from_key_code("Space"), None);
    }
}
