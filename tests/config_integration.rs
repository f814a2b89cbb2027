//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use eskit::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("ESK_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("ESK_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("ESK_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    // Values from config/default.toml
    assert_eq!(config.window.title, "ESKit Sample");
    assert!(config.framebuffer.depth);
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_defaults() {
    std::env::remove_var("ESK_WINDOW__TITLE");

    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.title, AppConfig::default().window.title);
}

#[test]
#[serial]
fn test_env_framebuffer_override() {
    std::env::set_var("ESK_FRAMEBUFFER__MULTISAMPLE", "true");
    let config = AppConfig::load().unwrap();
    assert!(config.framebuffer.multisample);
    std::env::remove_var("ESK_FRAMEBUFFER__MULTISAMPLE");
}
