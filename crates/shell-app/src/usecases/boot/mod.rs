//! Bootstrap coordinator.
//!
//! Sequences the shell's two bootstrap phases: the synchronous
//! configuration phase at process start, and the deferred mount once
//! the platform readiness signal fires.

use std::sync::Arc;

use anyhow::{Context, Result};

use shell_core::ports::LifecycleStatusPort;
use shell_core::ready::PlatformReady;
use shell_core::{AppConfig, BootPhase};

use super::{ConfigureBackend, MountRoot, SuppressStartupBanner};

/// Coordinates bootstrap readiness by orchestrating banner suppression,
/// HTTP client configuration, and the one-shot root mount.
pub struct BootCoordinator {
    config: AppConfig,
    backend: Arc<ConfigureBackend>,
    banner: Arc<SuppressStartupBanner>,
    mount: Arc<MountRoot>,
    status: Arc<dyn LifecycleStatusPort>,
}

/// Helper for constructing the coordinator with explicit dependency fields.
pub struct BootCoordinatorDeps {
    pub backend: Arc<ConfigureBackend>,
    pub banner: Arc<SuppressStartupBanner>,
    pub mount: Arc<MountRoot>,
    pub status: Arc<dyn LifecycleStatusPort>,
}

impl BootCoordinator {
    /// Construct a coordinator from config and dependency bundle.
    pub fn from_deps(config: AppConfig, deps: BootCoordinatorDeps) -> Self {
        let BootCoordinatorDeps {
            backend,
            banner,
            mount,
            status,
        } = deps;

        Self {
            config,
            backend,
            banner,
            mount,
            status,
        }
    }

    /// Synchronous bootstrap phase: suppress the startup banner, store
    /// the backend base URL, record `Configured`.
    ///
    /// Runs to completion before the caller registers the mount task,
    /// so the configuration record is written before any reader can
    /// plausibly issue a request.
    pub async fn configure(&self) -> Result<()> {
        if !self.config.startup_banner {
            self.banner.execute();
        }
        self.backend.execute(self.config.backend_base_url.clone());
        self.status
            .set_phase(BootPhase::Configured)
            .await
            .context("failed to record Configured phase")?;

        tracing::info!(
            base = %self.config.backend_base_url,
            anchor = %self.config.root_anchor,
            "Bootstrap configured"
        );
        Ok(())
    }

    /// Deferred phase: await the platform readiness signal, then mount
    /// the root component exactly once and record `Mounted`.
    ///
    /// Registration is non-blocking - spawn this future and the current
    /// call returns immediately. The await on `ready` is the only
    /// suspension point; if the signal never fires, the root is never
    /// mounted and no timeout intervenes.
    pub async fn run(self, ready: PlatformReady) -> Result<()> {
        ready
            .wait()
            .await
            .context("platform readiness signal lost")?;

        self.mount.execute(&self.config.root_anchor).await?;
        self.status
            .set_phase(BootPhase::Mounted)
            .await
            .context("failed to record Mounted phase")?;

        tracing::info!("Bootstrap complete");
        Ok(())
    }
}
