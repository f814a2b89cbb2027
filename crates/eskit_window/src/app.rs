//! Application loop
//!
//! [`run`] blocks the calling thread: it creates the event loop in polling
//! mode, creates the window and bootstraps the surface when the platform
//! resumes the application, then drives the [`FrameLoop`] once per
//! `RedrawRequested`, re-requesting a redraw after each frame. Recognized
//! winit events are translated into the platform-neutral [`InputEvent`]s the
//! loop consumes; everything else is ignored. When the loop observes an exit
//! event, `run` returns and every native resource is released by drop in
//! reverse acquisition order.

use std::sync::Arc;

use eskit_core::{Callbacks, FrameLoop, InputEvent, TouchPhase, WindowFlags};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, KeyCode, PhysicalKey};
use winit::window::WindowId;

use crate::context::SurfaceContext;
use crate::error::EsError;
use crate::window::WindowSystem;

/// Everything needed to create a window and its rendering surface.
#[derive(Debug, Clone)]
pub struct WindowDesc {
    /// Title bar text
    pub title: String,
    /// Requested width in logical pixels; 0 requests fullscreen
    pub width: u32,
    /// Requested height in logical pixels; 0 requests fullscreen
    pub height: u32,
    /// Force borderless fullscreen regardless of width/height
    pub fullscreen: bool,
    /// Synchronize presentation with the display refresh
    pub vsync: bool,
    /// Requested framebuffer capabilities
    pub flags: WindowFlags,
}

impl WindowDesc {
    /// Describe a window with the given title, size and capability flags.
    pub fn new(title: impl Into<String>, width: u32, height: u32, flags: WindowFlags) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            fullscreen: false,
            vsync: true,
            flags,
        }
    }
}

impl Default for WindowDesc {
    fn default() -> Self {
        Self::new("eskit", 0, 0, WindowFlags::empty())
    }
}

/// The context record handed to every callback.
///
/// Owns the bootstrapped GPU surface and tracks the current drawable size.
/// Exactly one exists per run; callbacks receive it by `&mut` reference.
pub struct EsContext {
    /// The bootstrapped surface, device and queue
    pub gpu: SurfaceContext,
    /// Current drawable width in physical pixels
    pub width: u32,
    /// Current drawable height in physical pixels
    pub height: u32,
    should_exit: bool,
}

impl EsContext {
    fn new(gpu: SurfaceContext) -> Self {
        let width = gpu.size.width;
        let height = gpu.size.height;
        Self {
            gpu,
            width,
            height,
            should_exit: false,
        }
    }

    /// Ask the loop to exit after the current frame, as the exit event would.
    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    /// Whether a programmatic exit has been requested.
    pub fn exit_requested(&self) -> bool {
        self.should_exit
    }
}

pub(crate) fn translate_touch(phase: winit::event::TouchPhase) -> TouchPhase {
    match phase {
        winit::event::TouchPhase::Started => TouchPhase::Began,
        winit::event::TouchPhase::Moved => TouchPhase::Moved,
        winit::event::TouchPhase::Ended | winit::event::TouchPhase::Cancelled => TouchPhase::Ended,
    }
}

pub(crate) fn key_char(key: &Key) -> Option<char> {
    key.to_text().and_then(|text| text.chars().next())
}

struct EsApp {
    desc: WindowDesc,
    frame_loop: FrameLoop<EsContext>,
    window: Option<WindowSystem>,
    ctx: Option<EsContext>,
    cursor: (i32, i32),
    error: Option<EsError>,
}

impl EsApp {
    fn new(desc: WindowDesc, callbacks: Callbacks<EsContext>) -> Self {
        Self {
            desc,
            frame_loop: FrameLoop::new(callbacks),
            window: None,
            ctx: None,
            cursor: (0, 0),
            error: None,
        }
    }

    /// Feed one translated event to the loop and stop the platform loop once
    /// an exit has been observed.
    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        match self.ctx.as_mut() {
            Some(ctx) => self.frame_loop.handle_event(ctx, event),
            // Before the surface exists only an exit can be acted upon.
            None => {
                if event == InputEvent::CloseRequested {
                    self.frame_loop.request_exit();
                }
            }
        }
        if self.frame_loop.is_exiting() {
            event_loop.exit();
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
            self.dispatch(event_loop, InputEvent::CloseRequested);
            return;
        }
        if let Some(ch) = key_char(&event.logical_key) {
            let (x, y) = self.cursor;
            self.dispatch(event_loop, InputEvent::Key { ch, x, y });
        }
    }
}

impl ApplicationHandler for EsApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.desc) {
            Ok(window) => window,
            Err(err) => {
                log::error!("{}", err);
                self.error = Some(err.into());
                event_loop.exit();
                return;
            }
        };

        let gpu = match pollster::block_on(SurfaceContext::new(
            Arc::clone(window.window()),
            self.desc.flags,
            self.desc.vsync,
        )) {
            Ok(gpu) => gpu,
            Err(err) => {
                log::error!("{}", err);
                self.error = Some(err.into());
                event_loop.exit();
                return;
            }
        };

        self.ctx = Some(EsContext::new(gpu));
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.dispatch(event_loop, InputEvent::CloseRequested);
            }

            WindowEvent::Resized(size) => {
                if let Some(ctx) = self.ctx.as_mut() {
                    ctx.gpu.resize(size);
                    ctx.width = ctx.gpu.size.width;
                    ctx.height = ctx.gpu.size.height;
                    log::debug!("resized to {}x{}", ctx.width, ctx.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event_loop, event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as i32, position.y as i32);
            }

            WindowEvent::Touch(touch) => {
                let event = InputEvent::Touch {
                    x: touch.location.x as f32,
                    y: touch.location.y as f32,
                    phase: translate_touch(touch.phase),
                };
                self.dispatch(event_loop, event);
            }

            WindowEvent::RedrawRequested => {
                let Some(ctx) = self.ctx.as_mut() else {
                    return;
                };
                let alive = self.frame_loop.step(ctx);
                if !alive || ctx.exit_requested() {
                    event_loop.exit();
                } else if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

/// Create the window and surface described by `desc` and block the calling
/// thread driving the frame loop until an exit event is observed.
///
/// Returns once teardown is complete; any bootstrap failure surfaces here.
pub fn run(desc: WindowDesc, callbacks: Callbacks<EsContext>) -> Result<(), EsError> {
    let event_loop = EventLoop::new().map_err(|err| EsError::EventLoop(err.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = EsApp::new(desc, callbacks);
    event_loop
        .run_app(&mut app)
        .map_err(|err| EsError::EventLoop(err.to_string()))?;

    log::info!(
        "main loop exited after {} frames ({:.2}s); releasing resources",
        app.frame_loop.frames(),
        app.frame_loop.total_secs()
    );
    // Surface and device drop before the window they were created from.
    drop(app.ctx.take());
    drop(app.window.take());

    match app.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{NamedKey, SmolStr};

    #[test]
    fn test_window_desc_defaults_to_fullscreen_vsync() {
        let desc = WindowDesc::default();
        assert_eq!(desc.width, 0);
        assert_eq!(desc.height, 0);
        assert!(desc.vsync);
        assert!(!desc.fullscreen);
        assert!(desc.flags.is_empty());
    }

    #[test]
    fn test_window_desc_new_keeps_requested_size() {
        let desc = WindowDesc::new("sample", 640, 480, WindowFlags::DEPTH);
        assert_eq!(desc.title, "sample");
        assert_eq!((desc.width, desc.height), (640, 480));
        assert_eq!(desc.flags, WindowFlags::DEPTH);
    }

    #[test]
    fn test_translate_touch_phases() {
        assert_eq!(
            translate_touch(winit::event::TouchPhase::Started),
            TouchPhase::Began
        );
        assert_eq!(
            translate_touch(winit::event::TouchPhase::Moved),
            TouchPhase::Moved
        );
        assert_eq!(
            translate_touch(winit::event::TouchPhase::Ended),
            TouchPhase::Ended
        );
        assert_eq!(
            translate_touch(winit::event::TouchPhase::Cancelled),
            TouchPhase::Ended
        );
    }

    #[test]
    fn test_key_char_from_character_key() {
        let key: Key = Key::Character(SmolStr::new("w"));
        assert_eq!(key_char(&key), Some('w'));
    }

    #[test]
    fn test_key_char_ignores_textless_named_keys() {
        let key: Key = Key::Named(NamedKey::ArrowUp);
        assert_eq!(key_char(&key), None);
    }
}
