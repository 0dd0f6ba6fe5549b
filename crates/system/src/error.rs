//! Error types for application startup

use thiserror::Error;

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort an application before its render loop starts
///
/// Once the first frame is presented nothing in the runtime fails; these
/// only cover window and graphics bootstrap.
#[derive(Error, Debug)]
pub enum Error {
    /// The platform event loop could not be created or exited abnormally
    #[error("Event loop error: {0}")]
    EventLoop(String),

    /// The OS window could not be created
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// The OpenGL context, surface or function loader failed
    #[error("Failed to initialize OpenGL context: {0}")]
    GlContext(String),

    /// The egui painter could not be created on the GL context
    #[error("Failed to initialize GUI painter: {0}")]
    Painter(String),
}

impl From<winit::error::EventLoopError> for Error {
    fn from(err: winit::error::EventLoopError) -> Self {
        Error::EventLoop(err.to_string())
    }
}

impl Error {
    /// Returns true if the failure happened while creating the window itself
    pub fn is_window_failure(&self) -> bool {
        matches!(self, Error::WindowCreation(_) | Error::EventLoop(_))
    }
}
