//! Window and GPU surface bootstrap
//!
//! This crate owns everything platform-facing: creating the native window
//! through winit, negotiating a wgpu surface/device against the requested
//! [`WindowFlags`](eskit_core::WindowFlags), translating the winit event
//! stream into the platform-neutral events `eskit_core` understands, and
//! blocking the calling thread in [`run`] until an exit event is observed.
//!
//! All native resources are owned by [`EsContext`] and released by drop in
//! reverse acquisition order on every exit path, including bootstrap
//! failures part-way through the bring-up sequence.

mod app;
mod context;
mod error;
mod window;

pub use app::{run, EsContext, WindowDesc};
pub use context::SurfaceContext;
pub use error::{ContextError, EsError, WindowError};
