//! # Bootstrap Integration Tests
//!
//! These tests verify that the bootstrap module correctly:
//!
//! 1. Loads configuration from TOML files (pure data behavior: the
//!    loader accepts whatever is in the file, no validation)
//! 2. Sequences the bootstrap contract end to end: no mount before the
//!    platform readiness signal, exactly one mount after it

use std::fs;
use std::time::Duration;

use shell_core::ports::{HttpConfigPort, LifecycleStatusPort};
use shell_core::ready::ready_signal;
use shell_core::{AppConfig, BootPhase};
use tempfile::TempDir;

use appshell::bootstrap::{load_config, run_app, wire};

#[test]
fn load_config_integration() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("appshell.toml");

    let toml_content = r##"
        [backend]
        base_url = "http://10.0.0.113:8000"

        [ui]
        root_anchor = "#app"
        startup_banner = false
    "##;
    fs::write(&config_path, toml_content).unwrap();

    let config = load_config(config_path).unwrap();

    assert_eq!(config.backend_base_url, "http://10.0.0.113:8000");
    assert_eq!(config.root_anchor, "#app");
    assert!(!config.startup_banner);
}

#[test]
fn empty_config_values_are_valid_facts() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("empty.toml");

    fs::write(&config_path, "").unwrap();

    let config = load_config(config_path).unwrap();

    // No validation, no defaults: empty facts stay empty.
    assert_eq!(config, AppConfig::empty());
}

#[tokio::test]
async fn end_to_end_bootstrap_contract() {
    let config = AppConfig {
        backend_base_url: "http://example:8000".to_string(),
        root_anchor: "#app".to_string(),
        startup_banner: false,
    };

    let (runtime, coordinator) = wire(config);

    // Synchronous phase: HTTP config and banner flag, no mount yet.
    coordinator.configure().await.unwrap();
    assert_eq!(runtime.client.options().base, "http://example:8000");
    assert!(!runtime.ui.startup_banner());
    assert_eq!(runtime.ui.mounted_anchor(), None);
    assert_eq!(runtime.status.get_phase().await, BootPhase::Configured);

    // Registering the mount task returns immediately; nothing mounts
    // until the platform readiness signal fires.
    let (notifier, ready) = ready_signal();
    let mount_task = tokio::spawn(coordinator.run(ready));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(runtime.ui.mounted_anchor(), None);

    // Fire once: exactly one mount at the configured anchor.
    assert!(notifier.notify());
    mount_task.await.unwrap().unwrap();
    assert_eq!(runtime.ui.mounted_anchor().as_deref(), Some("#app"));
    assert_eq!(runtime.status.get_phase().await, BootPhase::Mounted);

    // A second fire is a no-op, not a second mount.
    assert!(!notifier.notify());
    assert_eq!(runtime.ui.mounted_anchor().as_deref(), Some("#app"));
}

#[tokio::test]
async fn run_app_mounts_with_shipped_defaults() {
    let runtime = run_app(AppConfig::with_shipped_defaults()).await.unwrap();

    assert_eq!(runtime.client.options().base, "http://10.0.0.113:8000");
    assert!(!runtime.ui.startup_banner());
    assert_eq!(runtime.ui.mounted_anchor().as_deref(), Some("#app"));
    assert_eq!(runtime.status.get_phase().await, BootPhase::Mounted);
}
