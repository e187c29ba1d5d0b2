//! In-memory adapter for the lifecycle status port.

use anyhow::Result;
use async_trait::async_trait;
use shell_core::ports::LifecycleStatusPort;
use shell_core::BootPhase;

/// Stores the boot phase in a `tokio::sync::Mutex`.
///
/// Intended to live as an `Arc<InMemoryLifecycleStatus>` inside the
/// runtime so the coordinator and status queries share one instance.
pub struct InMemoryLifecycleStatus {
    phase: tokio::sync::Mutex<BootPhase>,
}

impl InMemoryLifecycleStatus {
    pub fn new() -> Self {
        Self {
            phase: tokio::sync::Mutex::new(BootPhase::Unconfigured),
        }
    }
}

impl Default for InMemoryLifecycleStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LifecycleStatusPort for InMemoryLifecycleStatus {
    async fn set_phase(&self, phase: BootPhase) -> Result<()> {
        *self.phase.lock().await = phase;
        Ok(())
    }

    async fn get_phase(&self) -> BootPhase {
        *self.phase.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_to_unconfigured() {
        let status = InMemoryLifecycleStatus::new();
        assert_eq!(status.get_phase().await, BootPhase::Unconfigured);
    }

    #[tokio::test]
    async fn set_and_get() {
        let status = InMemoryLifecycleStatus::new();
        status.set_phase(BootPhase::Configured).await.unwrap();
        assert_eq!(status.get_phase().await, BootPhase::Configured);

        status.set_phase(BootPhase::Mounted).await.unwrap();
        assert_eq!(status.get_phase().await, BootPhase::Mounted);
    }
}
