//! Mouse Engine
//!
//! A small desktop demo: drag colored rectangles around a canvas while
//! input events and frame timing are shown in egui windows.
//!
//! The pure logic (scene hit-testing and dragging, the event log, key edge
//! tracking, settings) lives in plain modules so it can be tested without a
//! window. [`MouseApp`] wires them into the `system` runtime.

pub mod app;
pub mod config;
pub mod event_log;
pub mod keyboard;
pub mod panels;
pub mod scene;

pub use app::MouseApp;
pub use config::{load_config, load_or_default, ConfigError, MouseConfig};
pub use event_log::EventLog;
pub use keyboard::{KeyTracker, KeyTransition, TransitionKind, EXIT_KEY, TRACKED_KEYS};
pub use scene::{clamp_to_canvas, default_objects, Scene, SceneObject, DEFAULT_CANVAS_SIZE};
