//! Platform-neutral frame loop machinery
//!
//! This crate holds everything about the per-frame loop that does not touch
//! a windowing system or a GPU: the framebuffer capability flags requested at
//! window creation, the typed callback registry, the frame timer, a
//! platform-neutral input event type, and the loop driver that ties them
//! together. The windowing backend (`eskit_window`) feeds translated events
//! into [`FrameLoop`] and calls [`FrameLoop::step`] once per frame.
//!
//! Keeping the driver free of backend types means the whole loop contract
//! (event translation, callback dispatch order, exit behaviour) is testable
//! without a display.

mod callbacks;
mod events;
mod flags;
mod frame;
mod timer;

pub use callbacks::Callbacks;
pub use events::{InputEvent, TouchPhase};
pub use flags::WindowFlags;
pub use frame::FrameLoop;
pub use timer::FrameTimer;
