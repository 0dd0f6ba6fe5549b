use glam::Vec2;
use glow::{HasContext, COLOR_BUFFER_BIT};
use system::{App, FrameContext, InputState};
use tracing::{debug, info};

use crate::config::MouseConfig;
use crate::event_log::EventLog;
use crate::keyboard::{KeyTracker, EXIT_KEY};
use crate::panels;
use crate::scene::Scene;

/// The demo application: all state the panels read and mutate
pub struct MouseApp {
    /// Clear color, edited by the color picker
    pub background: [f32; 3],
    pub scene: Scene,
    pub log: EventLog,
    pub keys: KeyTracker,
    /// Cursor position reported by the window, in physical pixels
    window_cursor: Option<Vec2>,
    exit_requested: bool,
}

impl Default for MouseApp {
    fn default() -> Self {
        Self::new(&MouseConfig::default())
    }
}

impl MouseApp {
    pub fn new(config: &MouseConfig) -> Self {
        Self {
            background: config.background,
            scene: Scene::new(config.canvas.size()),
            log: EventLog::new(),
            keys: KeyTracker::new(),
            window_cursor: None,
            exit_requested: false,
        }
    }

    /// Feed one frame of input: key edges go to the log, Escape requests exit
    pub fn handle_input(&mut self, input: &InputState) {
        for transition in self.keys.update(input) {
            self.log.log_key(&transition);
        }
        self.window_cursor = input.mouse_position();
        if input.is_key_pressed(EXIT_KEY) && !self.exit_requested {
            debug!("Exit key pressed");
            self.exit_requested = true;
        }
    }

    pub fn window_cursor(&self) -> Option<Vec2> {
        self.window_cursor
    }
}

impl App for MouseApp {
    fn init(&mut self, ctx: &FrameContext) {
        info!(
            "Scene ready: {} objects on a {}x{} canvas, window {}x{}",
            self.scene.objects().len(),
            self.scene.canvas_size().x,
            self.scene.canvas_size().y,
            ctx.width(),
            ctx.height()
        );
    }

    fn shutdown(&mut self, _ctx: &FrameContext) {
        info!("Shutting down with {} log entries", self.log.len());
    }

    fn update(&mut self, _ctx: &FrameContext, input: &InputState) {
        self.handle_input(input);
    }

    fn render(&mut self, ctx: &FrameContext) {
        let [r, g, b] = self.background;
        unsafe {
            ctx.gl.clear_color(r, g, b, 1.0);
            ctx.gl.clear(COLOR_BUFFER_BIT);
        }
    }

    fn ui(&mut self, ctx: &FrameContext, egui: &egui::Context) {
        panels::color_picker(egui, &mut self.background);
        panels::perf_stats(egui, ctx);
        panels::log_window(egui, &mut self.log, ctx.elapsed);
        panels::mouse_debug(egui, &mut self.log, self.window_cursor);
        panels::keyboard_debug(egui, &self.keys);
        panels::scene_canvas(egui, &mut self.scene);
        panels::inspector(egui, &mut self.scene);
    }

    fn should_exit(&self) -> bool {
        self.exit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_new_uses_config() {
        let mut config = MouseConfig::default();
        config.background = [0.1, 0.1, 0.1];
        config.canvas.width = 300.0;
        let app = MouseApp::new(&config);
        assert_eq!(app.background, [0.1, 0.1, 0.1]);
        assert_eq!(app.scene.canvas_size(), Vec2::new(300.0, 400.0));
        assert!(app.log.is_empty());
        assert!(!app.should_exit());
    }

    #[test]
    fn test_escape_requests_exit() {
        let mut app = MouseApp::default();
        let mut input = InputState::new();
        app.handle_input(&input);
        assert!(!app.should_exit());

        input.inject_key(KeyCode::Escape, true);
        app.handle_input(&input);
        assert!(app.should_exit());
        assert!(app.log.is_empty());
    }

    #[test]
    fn test_key_edges_are_logged_once() {
        let mut app = MouseApp::default();
        let mut input = InputState::new();
        input.inject_key(KeyCode::KeyD, true);
        for _ in 0..5 {
            app.handle_input(&input);
        }
        input.inject_key(KeyCode::KeyD, false);
        app.handle_input(&input);
        app.handle_input(&input);
        assert_eq!(app.log.entries(), ["Key D pressed", "Key D released"]);
    }

    #[test]
    fn test_window_cursor_tracks_input() {
        let mut app = MouseApp::default();
        let mut input = InputState::new();
        input.inject_mouse_pos(320.0, 240.0);
        app.handle_input(&input);
        assert_eq!(app.window_cursor(), Some(Vec2::new(320.0, 240.0)));
        input.cursor_left();
        app.handle_input(&input);
        assert_eq!(app.window_cursor(), None);
    }
}
