//! System crate - application framework for Mouse Engine
//!
//! This crate provides the abstractions for building single-window OpenGL
//! applications with an egui overlay.
//!
//! # Modules
//!
//! - [`app`]: Application trait and framework context
//! - [`input`]: Input state management (keyboard, cursor)
//! - [`timer`]: Frame timing utilities
//! - [`cli`]: Command line arguments shared by all applications
//! - [`error`]: Startup error type
//!
//! # Features
//!
//! - `runtime`: Enables the AppRuntime and EguiIntegration (requires glutin, egui)
//!
//! # Example
//!
//! ```ignore
//! use system::{run_app, App, AppConfig, FrameContext, InputState};
//!
//! struct MyApp;
//!
//! impl App for MyApp {
//!     fn init(&mut self, _ctx: &FrameContext) {}
//!     fn shutdown(&mut self, _ctx: &FrameContext) {}
//!     fn update(&mut self, _ctx: &FrameContext, _input: &InputState) {}
//!     fn render(&mut self, _ctx: &FrameContext) {}
//! }
//!
//! fn main() -> Result<(), system::Error> {
//!     run_app(MyApp, AppConfig::new("My App"))
//! }
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod timer;

// Runtime modules (require runtime feature)
#[cfg(feature = "runtime")]
mod egui_integration;
#[cfg(feature = "runtime")]
mod runner;

// Re-export commonly used types at crate root
pub use app::{App, FrameContext};
pub use cli::CommonArgs;
pub use error::{Error, Result};
pub use input::{InputState, MouseButtonType};
pub use timer::{fps_from_delta, FrameTimer};

#[cfg(feature = "runtime")]
pub use egui_integration::EguiIntegration;
#[cfg(feature = "runtime")]
pub use runner::{run_app, AppConfig, AppRuntime, DebugMode};

// Re-export egui when runtime feature is enabled
#[cfg(feature = "runtime")]
pub use egui;
