//! Logging stand-in for the opaque UI framework.
//!
//! The shell treats the UI framework as an external collaborator
//! reached through `UiFrameworkPort`. This adapter records the banner
//! flag and the mounted anchor and logs mount events via `tracing`; a
//! framework-specific adapter replaces it when a real presentation
//! layer is connected.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use shell_core::ports::ui::MountError;
use shell_core::ports::UiFrameworkPort;

pub struct LoggingUi {
    banner: AtomicBool,
    mounted: Mutex<Option<String>>,
}

impl LoggingUi {
    pub fn new() -> Self {
        Self {
            // Frameworks show the banner until told otherwise.
            banner: AtomicBool::new(true),
            mounted: Mutex::new(None),
        }
    }

    /// Whether the startup banner is currently enabled.
    pub fn startup_banner(&self) -> bool {
        self.banner.load(Ordering::SeqCst)
    }

    /// The anchor the root component is mounted at, if any.
    pub fn mounted_anchor(&self) -> Option<String> {
        self.mounted
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Default for LoggingUi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UiFrameworkPort for LoggingUi {
    fn set_startup_banner(&self, enabled: bool) {
        self.banner.store(enabled, Ordering::SeqCst);
        tracing::debug!(enabled, "Startup banner flag set");
    }

    async fn mount(&self, anchor: &str) -> Result<(), MountError> {
        let mut mounted = self
            .mounted
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(existing) = mounted.as_deref() {
            return Err(MountError::AlreadyMounted(existing.to_string()));
        }
        *mounted = Some(anchor.to_string());
        tracing::info!(%anchor, "Root component mounted");
        Ok(())
    }
}
