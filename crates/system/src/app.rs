//! Application trait and framework context
//!
//! This module defines the `App` trait that Mouse Engine applications
//! implement, along with the `FrameContext` that provides per-frame information.

use glow::Context;
use winit::window::Window;

use crate::input::InputState;
use crate::timer::fps_from_delta;

/// Frame context passed to update/render methods
///
/// Contains all per-frame information apps need without storing it themselves.
///
/// # Example
///
/// ```ignore
/// fn render(&mut self, ctx: &FrameContext) {
///     unsafe {
///         ctx.gl.clear_color(0.1, 0.1, 0.1, 1.0);
///         ctx.gl.clear(glow::COLOR_BUFFER_BIT);
///     }
/// }
/// ```
pub struct FrameContext<'a> {
    /// OpenGL context
    pub gl: &'a Context,
    /// Window reference (for DPI, size, etc.)
    pub window: &'a Window,
    /// Time since last frame in seconds
    pub delta_time: f32,
    /// Total elapsed time since app start in seconds
    pub elapsed: f32,
    /// Current frame number
    pub frame: u64,
    /// Window size in pixels (width, height)
    pub size: (u32, u32),
}

impl<'a> FrameContext<'a> {
    /// Create a new frame context
    pub fn new(
        gl: &'a Context,
        window: &'a Window,
        delta_time: f32,
        elapsed: f32,
        frame: u64,
        size: (u32, u32),
    ) -> Self {
        Self {
            gl,
            window,
            delta_time,
            elapsed,
            frame,
            size,
        }
    }

    /// Get the window width
    #[inline]
    pub fn width(&self) -> u32 {
        self.size.0
    }

    /// Get the window height
    #[inline]
    pub fn height(&self) -> u32 {
        self.size.1
    }

    /// Get the current frames per second based on delta_time
    #[inline]
    pub fn fps(&self) -> f32 {
        fps_from_delta(self.delta_time)
    }

    /// Get the frame time in milliseconds
    #[inline]
    pub fn frame_time_ms(&self) -> f32 {
        self.delta_time * 1000.0
    }
}

/// Application trait
///
/// # Lifecycle
///
/// 1. `init()` - Called once after the window and GL context exist
/// 2. `update()` + `render()` + `ui()` - Called each frame
/// 3. `shutdown()` - Called once before the event loop exits
pub trait App {
    /// Initialize the application
    ///
    /// Use this to create OpenGL resources and initialize state.
    fn init(&mut self, ctx: &FrameContext);

    /// Cleanup before destruction
    fn shutdown(&mut self, ctx: &FrameContext);

    /// Update application logic
    ///
    /// Called each frame before rendering.
    fn update(&mut self, ctx: &FrameContext, input: &InputState);

    /// Render the frame
    ///
    /// Called each frame after update, before the UI pass.
    fn render(&mut self, ctx: &FrameContext);

    /// Render UI (optional)
    ///
    /// Called after render with the egui context. The runtime handles all
    /// egui setup, input, and rendering.
    #[cfg(feature = "runtime")]
    fn ui(&mut self, _ctx: &FrameContext, _egui: &egui::Context) {
        // Default: no UI
    }

    /// Request to exit the application (optional)
    ///
    /// Called each frame after update. Return true to close the window.
    fn should_exit(&self) -> bool {
        false
    }
}
