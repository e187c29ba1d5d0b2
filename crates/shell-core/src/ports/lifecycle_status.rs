use anyhow::Result;
use async_trait::async_trait;

use crate::lifecycle::BootPhase;

/// Port for recording and querying the current boot phase.
#[async_trait]
pub trait LifecycleStatusPort: Send + Sync {
    async fn set_phase(&self, phase: BootPhase) -> Result<()>;

    async fn get_phase(&self) -> BootPhase;
}
