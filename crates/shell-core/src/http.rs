//! Shared HTTP client configuration.
//!
//! The original shell configured its request helper through an implicit
//! process-wide global. Here the record is an explicit struct held by
//! whatever issues requests: set once during the synchronous bootstrap
//! phase, read by every request for the rest of the process lifetime.

use std::sync::RwLock;

/// Options accepted by the shared HTTP client configuration surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
    /// Origin for relative request paths. Passed through uninspected.
    pub base: String,
}

/// Process-wide HTTP client configuration record.
///
/// Interior locking because the record is `Arc`-shared across tasks,
/// even though the write happens before any reader can plausibly run.
#[derive(Debug)]
pub struct SharedHttpOptions {
    inner: RwLock<HttpOptions>,
}

impl SharedHttpOptions {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HttpOptions {
                base: String::new(),
            }),
        }
    }

    /// Overwrite the configuration record.
    pub fn set(&self, options: HttpOptions) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = options;
    }

    /// Snapshot the current configuration.
    pub fn get(&self) -> HttpOptions {
        self.inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Default for SharedHttpOptions {
    fn default() -> Self {
        Self::new()
    }
}
