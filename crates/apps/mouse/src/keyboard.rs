//! Press/release edge detection for the tracked keys

use system::InputState;
use winit::keyboard::KeyCode;

/// Key that closes the window
pub const EXIT_KEY: KeyCode = KeyCode::Escape;

/// Number of keys whose transitions are logged
pub const TRACKED_KEY_COUNT: usize = 5;

/// Keys whose transitions are logged, with their display names
pub static TRACKED_KEYS: [(KeyCode, &str); TRACKED_KEY_COUNT] = [
    (KeyCode::KeyW, "W"),
    (KeyCode::KeyA, "A"),
    (KeyCode::KeyS, "S"),
    (KeyCode::KeyD, "D"),
    (KeyCode::Space, "Space"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Pressed,
    Released,
}

/// A single edge of a tracked key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTransition {
    pub name: &'static str,
    pub kind: TransitionKind,
}

/// Previous-frame held flags for each tracked key
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    held: [bool; TRACKED_KEY_COUNT],
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare the current input with last frame and report the edges
    ///
    /// A key held across many frames yields one `Pressed` and, once let go,
    /// one `Released`.
    pub fn update(&mut self, input: &InputState) -> Vec<KeyTransition> {
        let mut transitions = Vec::new();
        for ((key, name), was_held) in TRACKED_KEYS.iter().zip(self.held.iter_mut()) {
            let is_held = input.is_key_pressed(*key);
            if is_held != *was_held {
                transitions.push(KeyTransition {
                    name: *name,
                    kind: if is_held {
                        TransitionKind::Pressed
                    } else {
                        TransitionKind::Released
                    },
                });
                *was_held = is_held;
            }
        }
        transitions
    }

    /// Held state of every tracked key as of the last update
    pub fn states(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        TRACKED_KEYS
            .iter()
            .zip(self.held.iter())
            .map(|((_, name), held)| (*name, *held))
    }
}
