//! Input state management
//!
//! This module provides input state handling for keyboard and cursor. The
//! runtime accumulates window events into an [`InputState`] that apps read
//! once per frame.

use glam::Vec2;
use std::collections::HashSet;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Mouse button that produced a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonType {
    Left,
    Right,
    Middle,
}

// ============================================================================
// Input State
// ============================================================================

/// Input state snapshot for the current frame
///
/// Contains all input information aggregated from events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Currently pressed keys
    pub keys: HashSet<KeyCode>,
    /// Cursor position in window coordinates (physical pixels)
    pub mouse_pos: Option<Vec2>,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is currently pressed
    #[inline]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Get the cursor position if the cursor is inside the window
    pub fn mouse_position(&self) -> Option<Vec2> {
        self.mouse_pos
    }

    /// Record a winit key transition
    pub fn apply_key(&mut self, key: KeyCode, state: ElementState) {
        self.inject_key(key, state == ElementState::Pressed);
    }

    /// Inject a mouse position event
    ///
    /// Used for automated testing and by the runtime on cursor motion.
    pub fn inject_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse_pos = Some(Vec2::new(x, y));
    }

    /// Inject a key press event
    pub fn inject_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }

    /// Forget the cursor position (cursor left the window)
    pub fn cursor_left(&mut self) {
        self.mouse_pos = None;
    }

    /// Clear all held keys (focus lost)
    pub fn release_all(&mut self) {
        self.keys.clear();
    }
}
