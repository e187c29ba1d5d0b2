//! Boot phase state machine.

/// Bootstrap phase of the shell.
///
/// `Unconfigured → Configured` fires synchronously at process start;
/// `Configured → Mounted` fires asynchronously on the platform
/// readiness signal. `Mounted` is terminal for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Unconfigured,
    Configured,
    Mounted,
}
