//! Application runner for OpenGL applications
//!
//! Provides the window creation, OpenGL context setup, and event loop
//! management that is common across all applications.

use glow::{Context, HasContext};
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, DisplayApiPreference, GetGlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

#[cfg(target_os = "linux")]
use winit::platform::x11::EventLoopBuilderExtX11;

use crate::error::{Error, Result};
use crate::{App, FrameContext, FrameTimer, InputState};

use super::EguiIntegration;

/// Debug mode configuration
#[derive(Debug, Clone)]
pub struct DebugMode {
    /// Number of frames to run before exiting
    pub frames: u64,
    /// Path to save the final frame screenshot
    pub output_path: PathBuf,
}

impl DebugMode {
    /// Create a new debug mode configuration
    pub fn new(frames: u64) -> Self {
        Self {
            frames,
            output_path: PathBuf::from("output/frame_last.png"),
        }
    }
}

/// Configuration for the application window
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title
    pub title: String,
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    /// OpenGL major version
    pub gl_major: u8,
    /// OpenGL minor version
    pub gl_minor: u8,
    /// Optional debug mode configuration
    pub debug_mode: Option<DebugMode>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Application".to_string(),
            width: 800,
            height: 600,
            gl_major: 3,
            gl_minor: 3,
            debug_mode: None,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the OpenGL version (always requested with the core profile)
    pub fn with_gl_version(mut self, major: u8, minor: u8) -> Self {
        self.gl_major = major;
        self.gl_minor = minor;
        self
    }

    /// Enable debug mode with the specified number of frames
    pub fn with_debug_mode(mut self, frames: u64) -> Self {
        self.debug_mode = Some(DebugMode::new(frames));
        self
    }
}

/// Window plus the GL objects bound to it
struct Graphics {
    window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
    gl: Arc<Context>,
}

/// Runtime state for an application
pub struct AppRuntime<A: App> {
    config: AppConfig,
    app: A,
    window: Option<Window>,
    gl_context: Option<PossiblyCurrentContext>,
    gl_surface: Option<Surface<WindowSurface>>,
    gl: Option<Arc<Context>>,

    // Timing
    timer: FrameTimer,

    // Input state (accumulated between frames)
    input_state: InputState,

    // Egui integration
    egui: Option<EguiIntegration>,

    initialized: bool,
    shut_down: bool,

    // Startup failure, reported by run_app once the loop exits
    error: Option<Error>,
}

impl<A: App> AppRuntime<A> {
    /// Create a new runtime with the given app and configuration
    pub fn new(app: A, config: AppConfig) -> Self {
        Self {
            config,
            app,
            window: None,
            gl_context: None,
            gl_surface: None,
            gl: None,
            timer: FrameTimer::new(),
            input_state: InputState::default(),
            egui: None,
            initialized: false,
            shut_down: false,
            error: None,
        }
    }

    /// Take the startup error recorded during `resumed`, if any
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    /// Create the window, GL context, surface and function loader
    fn create_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let window_attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let (window, gl_config) = create_window_and_config(event_loop, window_attributes)?;

        let window_handle = window
            .window_handle()
            .map_err(|e| Error::WindowCreation(e.to_string()))?
            .as_raw();
        let gl_display = gl_config.display();

        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                self.config.gl_major,
                self.config.gl_minor,
            ))))
            .build(Some(window_handle));

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .map_err(|e| Error::GlContext(e.to_string()))?
        };

        let size = window.inner_size();
        let (width, height) = match (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
            (Some(w), Some(h)) => (w, h),
            _ => {
                return Err(Error::WindowCreation(format!(
                    "window has zero size {}x{}",
                    size.width, size.height
                )))
            }
        };
        let attrs =
            SurfaceAttributesBuilder::<WindowSurface>::new().build(window_handle, width, height);

        let gl_surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &attrs)
                .map_err(|e| Error::GlContext(e.to_string()))?
        };

        let gl_context = gl_context
            .make_current(&gl_surface)
            .map_err(|e| Error::GlContext(e.to_string()))?;

        let gl = Arc::new(unsafe {
            Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s))
        });

        unsafe {
            gl.viewport(0, 0, size.width as i32, size.height as i32);
        }

        Ok(Graphics {
            window,
            gl_context,
            gl_surface,
            gl,
        })
    }

    /// Call the app's shutdown hook once, if the app was initialized
    fn shutdown_app(&mut self) {
        if self.shut_down || !self.initialized {
            return;
        }
        if let (Some(window), Some(gl)) = (self.window.as_ref(), self.gl.as_ref()) {
            let size = window.inner_size();
            let ctx = FrameContext::new(
                gl,
                window,
                0.0,
                self.timer.elapsed(),
                self.timer.frame_count(),
                (size.width, size.height),
            );
            self.app.shutdown(&ctx);
            self.shut_down = true;
            info!(
                "App shut down after {} frames ({:.1} fps average)",
                self.timer.frame_count(),
                self.timer.average_fps()
            );
        }
    }

    /// Capture the current framebuffer and save to file
    fn capture_frame(
        gl: &Context,
        size: winit::dpi::PhysicalSize<u32>,
        output_path: &Path,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        use image::{ImageBuffer, Rgba};

        if size.width == 0 || size.height == 0 {
            return Err("framebuffer is empty".into());
        }

        let width = size.width as usize;
        let height = size.height as usize;
        let mut pixels = vec![0u8; width * height * 4];

        unsafe {
            gl.read_pixels(
                0,
                0,
                size.width as i32,
                size.height as i32,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelPackData::Slice(Some(&mut pixels)),
            );
        }

        // Flip image vertically (OpenGL has origin at bottom-left)
        let row = width * 4;
        let flipped: Vec<u8> = pixels.chunks_exact(row).rev().flatten().copied().collect();

        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(size.width, size.height, flipped)
                .ok_or("Failed to create image buffer")?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        img.save(output_path)?;
        Ok(())
    }
}

impl<A: App> ApplicationHandler for AppRuntime<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        info!("Initializing window and GL context");

        let graphics = match self.create_graphics(event_loop) {
            Ok(graphics) => graphics,
            Err(e) => {
                error!("{e}");
                self.error = Some(e);
                event_loop.exit();
                return;
            }
        };

        info!(
            "OpenGL {}.{} core context created",
            self.config.gl_major, self.config.gl_minor
        );

        let egui = match unsafe { EguiIntegration::new(&graphics.window, Arc::clone(&graphics.gl)) }
        {
            Ok(egui) => egui,
            Err(e) => {
                error!("{e}");
                self.error = Some(e);
                event_loop.exit();
                return;
            }
        };

        if !self.initialized {
            let size = graphics.window.inner_size();
            let ctx = FrameContext::new(
                &graphics.gl,
                &graphics.window,
                0.0,
                0.0,
                0,
                (size.width, size.height),
            );
            self.app.init(&ctx);
            self.initialized = true;
            info!("App initialized");
        }

        self.window = Some(graphics.window);
        self.gl_context = Some(graphics.gl_context);
        self.gl_surface = Some(graphics.gl_surface);
        self.gl = Some(graphics.gl);
        self.egui = Some(egui);
        self.timer.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Keep held keys and the cursor in sync even when egui
        // consumes the event, so nothing gets stuck down
        match &event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    self.input_state.apply_key(keycode, event.state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input_state
                    .inject_mouse_pos(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => self.input_state.cursor_left(),
            WindowEvent::Focused(false) => self.input_state.release_all(),
            _ => {}
        }

        // Let egui handle events first
        if let (Some(window), Some(egui)) = (self.window.as_ref(), self.egui.as_mut()) {
            if egui.on_window_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested");
                self.shutdown_app();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                debug!("Window resized to {}x{}", size.width, size.height);
                if let (Some(gl_surface), Some(gl_context), Some(width), Some(height)) = (
                    self.gl_surface.as_ref(),
                    self.gl_context.as_ref(),
                    NonZeroU32::new(size.width),
                    NonZeroU32::new(size.height),
                ) {
                    gl_surface.resize(gl_context, width, height);
                }
                if let Some(gl) = &self.gl {
                    unsafe {
                        gl.viewport(0, 0, size.width as i32, size.height as i32);
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                let delta_time = self.timer.tick();
                let elapsed = self.timer.elapsed();
                let frame = self.timer.frame_count();

                if let (Some(window), Some(gl), Some(gl_context), Some(gl_surface)) = (
                    self.window.as_ref(),
                    self.gl.as_ref(),
                    self.gl_context.as_ref(),
                    self.gl_surface.as_ref(),
                ) {
                    let size = window.inner_size();
                    let ctx = FrameContext::new(
                        gl,
                        window,
                        delta_time,
                        elapsed,
                        frame,
                        (size.width, size.height),
                    );

                    // Update app logic
                    self.app.update(&ctx, &self.input_state);

                    if self.app.should_exit() {
                        info!("App requested exit");
                        self.app.shutdown(&ctx);
                        self.shut_down = true;
                        event_loop.exit();
                        return;
                    }

                    // Render app
                    self.app.render(&ctx);

                    // Render egui UI
                    if let Some(egui) = &mut self.egui {
                        unsafe {
                            gl.disable(glow::DEPTH_TEST);
                            gl.enable(glow::BLEND);
                            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
                        }

                        egui.run(window, [size.width, size.height], |egui_ctx| {
                            self.app.ui(&ctx, egui_ctx);
                        });

                        unsafe {
                            gl.disable(glow::BLEND);
                        }
                    }

                    if let Err(e) = gl_surface.swap_buffers(gl_context) {
                        warn!("Failed to swap buffers: {e}");
                    }

                    // Check debug mode exit condition
                    if let Some(debug_mode) = &self.config.debug_mode {
                        if frame >= debug_mode.frames {
                            info!(
                                "Frame {}/{} - capturing screenshot and exiting",
                                frame, debug_mode.frames
                            );
                            match Self::capture_frame(gl, size, &debug_mode.output_path) {
                                Ok(()) => info!(
                                    "Screenshot saved to: {}",
                                    debug_mode.output_path.display()
                                ),
                                Err(e) => warn!("Failed to capture frame: {e}"),
                            }
                            self.app.shutdown(&ctx);
                            self.shut_down = true;
                            event_loop.exit();
                            return;
                        }
                        debug!("Frame {}/{}", frame, debug_mode.frames);
                    }

                    window.request_redraw();
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

/// Choose the config with the most multisample samples
///
/// Platforms may filter every candidate away, so an empty list is an error.
fn pick_config<C>(configs: impl Iterator<Item = C>, samples: impl Fn(&C) -> u8) -> Result<C> {
    configs
        .max_by_key(|config| samples(config))
        .ok_or_else(|| Error::GlContext("no framebuffer config matches the request".into()))
}

/// Open the platform GL display, pick the framebuffer config with the most
/// samples and create a window compatible with it
fn create_window_and_config(
    event_loop: &ActiveEventLoop,
    window_attributes: WindowAttributes,
) -> Result<(Window, Config)> {
    let template = ConfigTemplateBuilder::new()
        .with_alpha_size(8)
        .with_transparency(false);

    // WGL needs the native window before it can list configs
    #[cfg(target_os = "windows")]
    let window = event_loop
        .create_window(window_attributes)
        .map_err(|e| Error::WindowCreation(e.to_string()))?;
    #[cfg(target_os = "windows")]
    let raw_window = window
        .window_handle()
        .map_err(|e| Error::WindowCreation(e.to_string()))?
        .as_raw();
    #[cfg(target_os = "windows")]
    let template = template.compatible_with_native_window(raw_window);

    #[cfg(target_os = "windows")]
    let preference = DisplayApiPreference::WglThenEgl(Some(raw_window));
    #[cfg(target_os = "macos")]
    let preference = DisplayApiPreference::Cgl;
    #[cfg(all(unix, not(target_os = "macos")))]
    let preference = DisplayApiPreference::GlxThenEgl(Box::new(
        winit::platform::x11::register_xlib_error_hook,
    ));

    let raw_display = event_loop
        .display_handle()
        .map_err(|e| Error::WindowCreation(e.to_string()))?
        .as_raw();
    let gl_display = unsafe { Display::new(raw_display, preference) }
        .map_err(|e| Error::GlContext(e.to_string()))?;

    let configs = unsafe { gl_display.find_configs(template.build()) }
        .map_err(|e| Error::GlContext(e.to_string()))?;
    let gl_config = pick_config(configs, |config| config.num_samples())?;

    #[cfg(not(target_os = "windows"))]
    let window = glutin_winit::finalize_window(event_loop, window_attributes, &gl_config)
        .map_err(|e| Error::WindowCreation(e.to_string()))?;

    Ok((window, gl_config))
}

/// Create the platform event loop, forcing X11 on Linux
fn create_event_loop() -> Result<EventLoop<()>> {
    #[cfg(target_os = "linux")]
    {
        let mut builder = EventLoop::builder();
        builder.with_x11();
        Ok(builder.build()?)
    }

    #[cfg(not(target_os = "linux"))]
    {
        Ok(EventLoop::new()?)
    }
}

/// Run an application with the given configuration
///
/// This creates the event loop, window, GL context, and runs the app until
/// the window closes. Window or GL initialization failures are returned
/// after the loop exits.
pub fn run_app<A: App + 'static>(app: A, config: AppConfig) -> Result<()> {
    let event_loop = create_event_loop()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runtime = AppRuntime::new(app, config);

    event_loop.run_app(&mut runtime)?;

    match runtime.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
