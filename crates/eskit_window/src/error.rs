//! Error types for window and surface bootstrap

use std::fmt;

/// Window creation failure.
#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

/// Surface/device bootstrap failure.
///
/// Every variant is fatal to the bootstrap call that produced it; there is
/// no retry. Resources acquired before the failing step are released by drop.
#[derive(Debug)]
pub enum ContextError {
    /// Creating the rendering surface for the window failed
    SurfaceCreation(String),
    /// No GPU adapter compatible with the surface was found
    NoAdapter,
    /// The adapter refused the device request
    DeviceRequest(String),
    /// The surface reported no usable formats or alpha modes
    NoSurfaceConfig,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::SurfaceCreation(msg) => write!(f, "surface creation failed: {}", msg),
            ContextError::NoAdapter => write!(f, "no compatible GPU adapter found"),
            ContextError::DeviceRequest(msg) => write!(f, "device request failed: {}", msg),
            ContextError::NoSurfaceConfig => {
                write!(f, "surface reported no usable configuration")
            }
        }
    }
}

impl std::error::Error for ContextError {}

/// Top-level error returned by [`run`](crate::run).
#[derive(Debug)]
pub enum EsError {
    /// Creating or running the platform event loop failed
    EventLoop(String),
    /// Creating the native window failed
    Window(WindowError),
    /// Bootstrapping the rendering surface failed
    Context(ContextError),
}

impl fmt::Display for EsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EsError::EventLoop(msg) => write!(f, "event loop error: {}", msg),
            EsError::Window(err) => write!(f, "{}", err),
            EsError::Context(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for EsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EsError::EventLoop(_) => None,
            EsError::Window(err) => Some(err),
            EsError::Context(err) => Some(err),
        }
    }
}

impl From<WindowError> for EsError {
    fn from(err: WindowError) -> Self {
        EsError::Window(err)
    }
}

impl From<ContextError> for EsError {
    fn from(err: ContextError) -> Self {
        EsError::Context(err)
    }
}
