//! Bootstrap wiring and run sequence.
//!
//! Three phases, in the order the original shell performed them:
//!
//! 1. **Wire**: construct the adapters and the boot coordinator.
//! 2. **Configure** (synchronous): suppress the startup banner and
//!    store the backend base URL.
//! 3. **Mount** (deferred): spawn the mount task, fire the platform
//!    readiness notifier once wiring is complete, join the mount.

use std::sync::Arc;

use anyhow::{Context, Result};
use shell_app::usecases::{ConfigureBackend, MountRoot, SuppressStartupBanner};
use shell_app::{BootCoordinator, BootCoordinatorDeps};
use shell_core::ready::ready_signal;
use shell_core::AppConfig;
use shell_infra::{BackendClient, InMemoryLifecycleStatus, LoggingUi};

/// The completed application runtime.
///
/// Holds the adapters that outlive the bootstrap: the shared HTTP
/// client, the UI framework handle, and the lifecycle status store.
pub struct Runtime {
    pub client: Arc<BackendClient>,
    pub ui: Arc<LoggingUi>,
    pub status: Arc<InMemoryLifecycleStatus>,
}

/// Wire the adapters and build the boot coordinator for the given config.
pub fn wire(config: AppConfig) -> (Runtime, BootCoordinator) {
    let client = Arc::new(BackendClient::new());
    let ui = Arc::new(LoggingUi::new());
    let status = Arc::new(InMemoryLifecycleStatus::new());

    let coordinator = BootCoordinator::from_deps(
        config,
        BootCoordinatorDeps {
            backend: Arc::new(ConfigureBackend::from_port(client.clone())),
            banner: Arc::new(SuppressStartupBanner::from_port(ui.clone())),
            mount: Arc::new(MountRoot::from_port(ui.clone())),
            status: status.clone(),
        },
    );

    (
        Runtime {
            client,
            ui,
            status,
        },
        coordinator,
    )
}

/// Run the shell bootstrap to completion.
///
/// The readiness notifier is fired by the host integration; in this
/// shell, runtime wiring finishing is that signal. A host that delivers
/// its own event (e.g. a device-ready callback) holds the notifier and
/// fires it instead.
pub async fn run_app(config: AppConfig) -> Result<Runtime> {
    let (runtime, coordinator) = wire(config);

    coordinator.configure().await?;

    let (notifier, ready) = ready_signal();
    let mount_task = tokio::spawn(coordinator.run(ready));

    tracing::info!("Platform ready");
    notifier.notify();

    mount_task
        .await
        .context("mount task panicked")?
        .context("bootstrap mount failed")?;

    Ok(runtime)
}
