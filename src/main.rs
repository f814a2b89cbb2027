//! ESKit sample application
//!
//! The smallest useful program on top of the framework: create a window with
//! the configured framebuffer capabilities, optionally preload a TGA texture,
//! and run an update/draw loop that animates the clear color.

use std::cell::Cell;
use std::rc::Rc;

use eskit::config::AppConfig;
use eskit::{run, AssetDir, Callbacks, EsContext, WindowDesc};

fn main() {
    env_logger::init();
    log::info!("starting eskit sample");

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Preload the configured startup texture, if any, to exercise the loader.
    if let Some(name) = &config.assets.startup_texture {
        let assets = AssetDir::new(&config.assets.root);
        match assets.load_tga(name) {
            Ok(image) => log::info!(
                "loaded texture '{}': {}x{}, {} bytes",
                name,
                image.width,
                image.height,
                image.pixels.len()
            ),
            Err(err) => log::warn!("failed to load texture '{}': {}", name, err),
        }
    }

    let desc = WindowDesc {
        title: config.window.title.clone(),
        width: config.window.width,
        height: config.window.height,
        fullscreen: config.window.fullscreen,
        vsync: config.window.vsync,
        flags: config.framebuffer.to_window_flags(),
    };

    // The update callback accumulates time; the draw callback turns it into
    // a slowly cycling clear color.
    let elapsed = Rc::new(Cell::new(0.0f32));
    let update_elapsed = Rc::clone(&elapsed);

    let callbacks = Callbacks::new()
        .on_update(move |_ctx: &mut EsContext, dt| {
            update_elapsed.set(update_elapsed.get() + dt);
        })
        .on_draw(move |ctx: &mut EsContext| {
            let t = elapsed.get();
            let color = wgpu::Color {
                r: (0.5 + 0.5 * (t * 0.7).sin()) as f64,
                g: (0.5 + 0.5 * (t * 0.9).sin()) as f64,
                b: (0.5 + 0.5 * (t * 1.1).sin()) as f64,
                a: 1.0,
            };
            if let Err(err) = ctx.gpu.clear_frame(color) {
                match err {
                    wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                        let size = ctx.gpu.size;
                        ctx.gpu.resize(size);
                    }
                    wgpu::SurfaceError::OutOfMemory => {
                        log::error!("surface out of memory, exiting");
                        ctx.request_exit();
                    }
                    other => log::warn!("surface error: {:?}", other),
                }
            }
        })
        .on_key(|_ctx: &mut EsContext, ch, x, y| {
            log::info!("key '{}' at ({}, {})", ch, x, y);
        });

    if let Err(err) = run(desc, callbacks) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
