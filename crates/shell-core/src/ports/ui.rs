use async_trait::async_trait;

/// Port to the opaque UI framework.
///
/// # Behavior
/// - `set_startup_banner()` is idempotent, side-effect only.
/// - `mount()` is one-shot and non-reentrant: a second mount on the
///   same framework instance is an error, not a replacement.
#[async_trait]
pub trait UiFrameworkPort: Send + Sync {
    /// Toggle the framework's non-production startup banner.
    fn set_startup_banner(&self, enabled: bool);

    /// Instantiate the root component and attach it at `anchor`.
    async fn mount(&self, anchor: &str) -> Result<(), MountError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("root component already mounted at {0}")]
    AlreadyMounted(String),

    #[error("mount anchor {0} not found")]
    AnchorNotFound(String),

    #[error("framework error: {0}")]
    Framework(String),
}
