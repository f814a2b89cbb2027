//! Framebuffer capability flags requested at window creation

use bitflags::bitflags;

bitflags! {
    /// Optional framebuffer attachments requested when creating a window.
    ///
    /// The backend maps these onto concrete surface and texture choices:
    /// `ALPHA` selects a compositable alpha mode, `DEPTH` and `STENCIL`
    /// select the depth/stencil attachment format, and `MULTISAMPLE`
    /// requests a multisampled color target.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        /// Framebuffer should have an alpha channel usable for compositing
        const ALPHA = 1 << 0;
        /// A depth buffer should be created
        const DEPTH = 1 << 1;
        /// A stencil buffer should be created
        const STENCIL = 1 << 2;
        /// A multisampled color buffer should be created
        const MULTISAMPLE = 1 << 3;
    }
}

impl Default for WindowFlags {
    fn default() -> Self {
        WindowFlags::empty()
    }
}
