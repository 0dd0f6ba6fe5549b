//! Append-only log of user input events shown in the Log window

use glam::Vec2;
use system::MouseButtonType;
use tracing::debug;

use crate::keyboard::{KeyTransition, TransitionKind};

/// Ordered list of human-readable event lines
///
/// Grows without bound until [`EventLog::clear`] is called.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        debug!(target: "mouse_engine::log", "{entry}");
        self.entries.push(entry);
    }

    /// Log a press of the "Click to Log" button
    pub fn log_button(&mut self, elapsed_secs: f32) {
        self.push(format!("Clicked at {elapsed_secs:.3}s"));
    }

    /// Log a mouse click at a GUI-space position
    pub fn log_click(&mut self, button: MouseButtonType, pos: Vec2) {
        let label = match button {
            MouseButtonType::Left => "Left",
            MouseButtonType::Right => "Right",
            MouseButtonType::Middle => "Middle",
        };
        self.push(format!("{label} Click at ({:.1}, {:.1})", pos.x, pos.y));
    }

    /// Log a tracked key edge
    pub fn log_key(&mut self, transition: &KeyTransition) {
        let verb = match transition.kind {
            TransitionKind::Pressed => "pressed",
            TransitionKind::Released => "released",
        };
        self.push(format!("Key {} {verb}", transition.name));
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}
