//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority
//! (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ESK_SECTION__KEY`)

use eskit_core::WindowFlags;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Requested framebuffer capabilities
    #[serde(default)]
    pub framebuffer: FramebufferConfig,
    /// Asset configuration
    #[serde(default)]
    pub assets: AssetConfig,
}

impl AppConfig {
    /// Load configuration from the default `config` directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory.
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // User config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // ESK_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("ESK_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels (0 = fullscreen)
    pub width: u32,
    /// Window height in pixels (0 = fullscreen)
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ESKit Sample".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Requested framebuffer capabilities, mapped onto [`WindowFlags`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramebufferConfig {
    /// Request an alpha channel usable for compositing
    pub alpha: bool,
    /// Request a depth buffer
    pub depth: bool,
    /// Request a stencil buffer
    pub stencil: bool,
    /// Request multisampling
    pub multisample: bool,
}

impl Default for FramebufferConfig {
    fn default() -> Self {
        Self {
            alpha: false,
            depth: true,
            stencil: false,
            multisample: false,
        }
    }
}

impl FramebufferConfig {
    /// Convert the configured booleans into window creation flags.
    pub fn to_window_flags(&self) -> WindowFlags {
        let mut flags = WindowFlags::empty();
        if self.alpha {
            flags |= WindowFlags::ALPHA;
        }
        if self.depth {
            flags |= WindowFlags::DEPTH;
        }
        if self.stencil {
            flags |= WindowFlags::STENCIL;
        }
        if self.multisample {
            flags |= WindowFlags::MULTISAMPLE;
        }
        flags
    }
}

/// Asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Directory texture names are resolved against
    pub root: String,
    /// Optional texture to load at startup, relative to `root`
    pub startup_texture: Option<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: "assets".to_string(),
            startup_texture: None,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert!(config.framebuffer.depth);
        assert!(!config.framebuffer.multisample);
        assert_eq!(config.assets.root, "assets");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("depth"));
    }

    #[test]
    fn test_framebuffer_flags_mapping() {
        let fb = FramebufferConfig {
            alpha: true,
            depth: true,
            stencil: false,
            multisample: true,
        };
        let flags = fb.to_window_flags();
        assert!(flags.contains(WindowFlags::ALPHA));
        assert!(flags.contains(WindowFlags::DEPTH));
        assert!(!flags.contains(WindowFlags::STENCIL));
        assert!(flags.contains(WindowFlags::MULTISAMPLE));
    }

    #[test]
    fn test_empty_framebuffer_maps_to_empty_flags() {
        let fb = FramebufferConfig {
            alpha: false,
            depth: false,
            stencil: false,
            multisample: false,
        };
        assert!(fb.to_window_flags().is_empty());
    }
}
