//! GPU surface bootstrap
//!
//! [`SurfaceContext`] performs the strictly ordered bring-up sequence that
//! turns a native window plus a set of requested framebuffer capabilities
//! into a ready-to-render surface: instance, surface, adapter, device and
//! queue, then a surface configuration derived from the capability flags.
//! Each step's failure aborts the whole operation with a [`ContextError`];
//! anything acquired before the failing step is released by drop.

use std::sync::Arc;

use eskit_core::WindowFlags;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::error::ContextError;

/// Depth/stencil attachment format implied by the capability flags, if any.
///
/// A stencil request implies a combined depth/stencil attachment; a plain
/// depth request gets a depth-only format.
pub fn depth_stencil_format(flags: WindowFlags) -> Option<wgpu::TextureFormat> {
    if flags.contains(WindowFlags::STENCIL) {
        Some(wgpu::TextureFormat::Depth24PlusStencil8)
    } else if flags.contains(WindowFlags::DEPTH) {
        Some(wgpu::TextureFormat::Depth24Plus)
    } else {
        None
    }
}

/// Color target sample count implied by the capability flags.
pub fn sample_count(flags: WindowFlags) -> u32 {
    if flags.contains(WindowFlags::MULTISAMPLE) {
        4
    } else {
        1
    }
}

/// Present mode for the requested swap interval.
pub fn present_mode(vsync: bool) -> wgpu::PresentMode {
    if vsync {
        wgpu::PresentMode::AutoVsync
    } else {
        wgpu::PresentMode::AutoNoVsync
    }
}

/// Pick a composite alpha mode from what the surface supports.
///
/// With `ALPHA` requested, a compositable mode is preferred; otherwise the
/// surface's first supported mode is used, favouring opaque.
pub fn pick_alpha_mode(
    flags: WindowFlags,
    supported: &[wgpu::CompositeAlphaMode],
) -> Option<wgpu::CompositeAlphaMode> {
    let preferred: &[wgpu::CompositeAlphaMode] = if flags.contains(WindowFlags::ALPHA) {
        &[
            wgpu::CompositeAlphaMode::PreMultiplied,
            wgpu::CompositeAlphaMode::PostMultiplied,
        ]
    } else {
        &[wgpu::CompositeAlphaMode::Opaque]
    };
    preferred
        .iter()
        .find(|&&mode| supported.contains(&mode))
        .or_else(|| supported.first())
        .copied()
}

/// The rendering bootstrap record: surface, device, queue, configuration
/// and the attachments implied by the capability flags.
///
/// Fields are declared in reverse acquisition order so drop glue releases
/// them in reverse of how they were acquired.
pub struct SurfaceContext {
    depth_view: Option<wgpu::TextureView>,
    msaa_view: Option<wgpu::TextureView>,
    /// Active surface configuration (format, size, present mode)
    pub config: wgpu::SurfaceConfiguration,
    pub queue: wgpu::Queue,
    pub device: wgpu::Device,
    pub surface: wgpu::Surface<'static>,
    /// Current surface size in physical pixels
    pub size: PhysicalSize<u32>,
    sample_count: u32,
    depth_format: Option<wgpu::TextureFormat>,
}

impl SurfaceContext {
    /// Bootstrap a surface for the given window and capability flags.
    ///
    /// The steps are strictly ordered and each failure is terminal to the
    /// whole call. The caller is expected to block on this with `pollster`.
    pub async fn new(
        window: Arc<Window>,
        flags: WindowFlags,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|err| ContextError::SurfaceCreation(err.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ContextError::NoAdapter)?;
        log::info!("using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("eskit device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(|err| ContextError::DeviceRequest(err.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|format| format.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(ContextError::NoSurfaceConfig)?;
        let alpha_mode =
            pick_alpha_mode(flags, &caps.alpha_modes).ok_or(ContextError::NoSurfaceConfig)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: present_mode(vsync),
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let sample_count = sample_count(flags);
        let depth_format = depth_stencil_format(flags);
        let depth_view =
            depth_format.map(|format| make_depth_view(&device, &config, format, sample_count));
        let msaa_view = (sample_count > 1).then(|| make_msaa_view(&device, &config, sample_count));

        log::info!(
            "surface configured: {}x{} {:?}, samples={}, depth={:?}",
            width,
            height,
            format,
            sample_count,
            depth_format
        );

        Ok(Self {
            depth_view,
            msaa_view,
            config,
            queue,
            device,
            surface,
            size: PhysicalSize::new(width, height),
            sample_count,
            depth_format,
        })
    }

    /// Reconfigure the surface for a new window size, recreating the
    /// depth/stencil and multisample attachments to match.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);

        self.depth_view = self
            .depth_format
            .map(|format| make_depth_view(&self.device, &self.config, format, self.sample_count));
        self.msaa_view = (self.sample_count > 1)
            .then(|| make_msaa_view(&self.device, &self.config, self.sample_count));
    }

    /// Width/height ratio of the current surface.
    pub fn aspect_ratio(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    /// Color sample count of the configured color target.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Configured depth/stencil format, if one was requested.
    pub fn depth_format(&self) -> Option<wgpu::TextureFormat> {
        self.depth_format
    }

    /// Acquire the current frame, clear every configured attachment to the
    /// given color (depth to 1.0, stencil to 0), and present.
    ///
    /// This is the minimal per-frame draw the samples build on. Multisampled
    /// targets are resolved into the frame as part of the pass.
    pub fn clear_frame(&mut self, color: wgpu::Color) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("clear encoder"),
            });

        {
            let (view, resolve_target) = match &self.msaa_view {
                Some(msaa) => (msaa, Some(&frame_view)),
                None => (&frame_view, None),
            };
            let depth_stencil_attachment =
                self.depth_view
                    .as_ref()
                    .map(|view| wgpu::RenderPassDepthStencilAttachment {
                        view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: (self.depth_format
                            == Some(wgpu::TextureFormat::Depth24PlusStencil8))
                        .then_some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(0),
                            store: wgpu::StoreOp::Store,
                        }),
                    });

            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("clear pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn make_depth_view(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    format: wgpu::TextureFormat,
    sample_count: u32,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn make_msaa_view(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    sample_count: u32,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("msaa color texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format: config.format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
