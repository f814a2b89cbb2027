//! Native window ownership
//!
//! Thin wrapper around the winit window. A zero requested size means
//! borderless fullscreen, matching the behaviour of the mobile platforms the
//! samples originally targeted, where windows always covered the screen.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window};

use crate::app::WindowDesc;
use crate::error::WindowError;

/// Owns the native window for the lifetime of the run.
pub struct WindowSystem {
    window: Arc<Window>,
}

impl WindowSystem {
    /// Create the window described by `desc`.
    pub fn create(event_loop: &ActiveEventLoop, desc: &WindowDesc) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes().with_title(&desc.title);

        if desc.fullscreen || desc.width == 0 || desc.height == 0 {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        } else {
            attrs = attrs.with_inner_size(LogicalSize::new(desc.width, desc.height));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|err| WindowError::CreationFailed(err.to_string()))?,
        );

        Ok(Self { window })
    }

    /// Shared handle to the window (for surface creation).
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Request a redraw for the next frame.
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
