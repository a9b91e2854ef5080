//! Keyboard to intent translation
//!
//! The window layer reports key presses and which keys are currently held.
//! [`InputTranslator`] turns those into the [`TickInput`] the simulation
//! consumes, and reports quit requests separately since quitting is not
//! simulation state.

use serde::{Deserialize, Serialize};

use crate::consts::MOVE_SPEED;
use crate::sim::{Action, CursorStep, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    R,
    Escape,
    W,
    A,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
}

/// What a key press means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Action(Action),
    Quit,
}

impl Key {
    fn press_binding(self) -> Option<Binding> {
        match self {
            Key::R => Some(Binding::Action(Action::Reset)),
            Key::Escape => Some(Binding::Quit),
            Key::W => Some(Binding::Action(Action::Jump)),
            Key::Up => Some(Binding::Action(Action::Cursor(CursorStep::Up))),
            Key::Down => Some(Binding::Action(Action::Cursor(CursorStep::Down))),
            Key::Left => Some(Binding::Action(Action::Cursor(CursorStep::Left))),
            Key::Right => Some(Binding::Action(Action::Cursor(CursorStep::Right))),
            Key::Space => Some(Binding::Action(Action::PlaceRift)),
            // Movement keys only matter while held
            Key::A | Key::D => None,
        }
    }
}

/// Keys held down at the moment the frame is sampled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn from_keys(keys: &[Key]) -> Self {
        Self {
            left: keys.contains(&Key::A),
            right: keys.contains(&Key::D),
        }
    }

    /// Signed horizontal speed. Left takes priority when both are held.
    pub fn move_x(&self) -> f32 {
        if self.left {
            -MOVE_SPEED
        } else if self.right {
            MOVE_SPEED
        } else {
            0.0
        }
    }
}

/// Result of translating one frame of raw input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameIntent {
    pub input: TickInput,
    /// The window should close; never forwarded to the simulation
    pub quit: bool,
}

/// Stateless mapping from raw key input to per-frame intents
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTranslator;

impl InputTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate this frame's key presses (in arrival order) and held keys
    pub fn translate(&self, pressed: &[Key], held: HeldKeys) -> FrameIntent {
        let mut intent = FrameIntent::default();
        for key in pressed {
            match key.press_binding() {
                Some(Binding::Action(action)) => intent.input.actions.push(action),
                Some(Binding::Quit) => intent.quit = true,
                None => {}
            }
        }
        intent.input.move_x = held.move_x();
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_bindings_keep_order() {
        let translator = InputTranslator::new();
        let intent = translator.translate(
            &[Key::Space, Key::Right, Key::Space, Key::W, Key::R],
            HeldKeys::default(),
        );

        assert_eq!(
            intent.input.actions,
            vec![
                Action::PlaceRift,
                Action::Cursor(CursorStep::Right),
                Action::PlaceRift,
                Action::Jump,
                Action::Reset,
            ]
        );
        assert!(!intent.quit);
        assert_eq!(intent.input.move_x, 0.0);
    }

    #[test]
    fn test_escape_requests_quit_only() {
        let intent = InputTranslator::new().translate(&[Key::Escape], HeldKeys::default());
        assert!(intent.quit);
        assert!(intent.input.actions.is_empty());
    }

    #[test]
    fn test_held_movement() {
        let translator = InputTranslator::new();
        let speed = |keys: &[Key]| {
            translator
                .translate(&[], HeldKeys::from_keys(keys))
                .input
                .move_x
        };

        assert_eq!(speed(&[]), 0.0);
        assert_eq!(speed(&[Key::A]), -100.0);
        assert_eq!(speed(&[Key::D]), 100.0);
        assert_eq!(speed(&[Key::D, Key::A]), -100.0);
    }

    #[test]
    fn test_pressing_movement_keys_adds_no_action() {
        let intent = InputTranslator::new().translate(&[Key::A, Key::D], HeldKeys::default());
        assert!(intent.input.actions.is_empty());
    }
}
