//! ESKit - window, surface and frame loop bootstrap for small GPU samples
//!
//! A thin framework in three layers:
//!
//! - [`eskit_core`] - capability flags, the callback registry and the
//!   frame loop driver, free of any platform dependency
//! - [`eskit_window`] - winit window creation, wgpu surface bootstrap and
//!   the blocking [`run`] entry point
//! - [`eskit_image`] - TGA texture loading for sample assets
//!
//! The root crate adds configuration loading and ships the sample binary.

pub mod config;

pub use eskit_core::{Callbacks, FrameLoop, FrameTimer, InputEvent, TouchPhase, WindowFlags};
pub use eskit_image::{decode, AssetDir, ImageError, TgaImage};
pub use eskit_window::{run, ContextError, EsContext, EsError, SurfaceContext, WindowDesc};
