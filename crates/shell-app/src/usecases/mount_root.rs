//! MountRoot use case - attaches the root component to its anchor.

use std::sync::Arc;

use shell_core::ports::ui::MountError;
use shell_core::ports::UiFrameworkPort;

/// Mounts the root UI component at a named anchor.
///
/// One-shot: the framework rejects a second mount, and the coordinator
/// never asks for one because the readiness signal delivers at most
/// once.
pub struct MountRoot {
    ui: Arc<dyn UiFrameworkPort>,
}

impl MountRoot {
    pub fn from_port(ui: Arc<dyn UiFrameworkPort>) -> Self {
        Self { ui }
    }

    pub async fn execute(&self, anchor: &str) -> Result<(), MountError> {
        tracing::info!(%anchor, "Mounting root component");
        self.ui.mount(anchor).await
    }
}
