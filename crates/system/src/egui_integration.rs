//! Egui integration for OpenGL applications
//!
//! Wraps egui_glow and egui_winit so the runtime can feed window events in
//! and paint one UI pass per frame.

use egui::Context as EguiContext;
use egui_glow::Painter;
use egui_winit::State as EguiState;
use glow::Context;
use std::sync::Arc;
use winit::window::Window;

use crate::error::{Error, Result};

/// Egui integration wrapper for OpenGL applications
pub struct EguiIntegration {
    /// Egui context for running UI logic
    pub ctx: EguiContext,
    /// Egui-winit state for event handling
    state: EguiState,
    /// Egui-glow painter for rendering
    painter: Painter,
}

impl EguiIntegration {
    /// Create a new egui integration for the given window and GL context
    ///
    /// # Safety
    /// The GL context must be current when this is called.
    pub unsafe fn new(window: &Window, gl: Arc<Context>) -> Result<Self> {
        let ctx = EguiContext::default();
        ctx.set_visuals(egui::Visuals::dark());
        let state = EguiState::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            None,
            None,
            None,
        );
        let painter =
            Painter::new(gl, "", None, false).map_err(|e| Error::Painter(format!("{e:?}")))?;

        Ok(Self {
            ctx,
            state,
            painter,
        })
    }

    /// Get a reference to the egui context
    pub fn context(&self) -> &EguiContext {
        &self.ctx
    }

    /// Handle a window event
    ///
    /// Returns true if egui wants exclusive use of this event.
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run egui for one frame with the given UI function
    ///
    /// Gathers input, runs the UI closure, then tessellates and paints.
    pub fn run(&mut self, window: &Window, size: [u32; 2], run_ui: impl FnMut(&EguiContext)) {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, run_ui);

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let clipped_primitives = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        self.painter.paint_and_update_textures(
            size,
            full_output.pixels_per_point,
            &clipped_primitives,
            &full_output.textures_delta,
        );
    }
}

impl Drop for EguiIntegration {
    fn drop(&mut self) {
        self.painter.destroy();
    }
}
