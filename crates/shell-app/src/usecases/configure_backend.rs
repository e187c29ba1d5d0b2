//! ConfigureBackend use case - stores the backend base URL in the
//! shared HTTP client configuration.

use std::sync::Arc;

use shell_core::ports::HttpConfigPort;
use shell_core::HttpOptions;

/// Stores the backend origin in the shared HTTP client configuration.
///
/// The URL is passed through uninspected; a malformed value surfaces as
/// whatever failure the client produces on first use.
pub struct ConfigureBackend {
    http: Arc<dyn HttpConfigPort>,
}

impl ConfigureBackend {
    pub fn from_port(http: Arc<dyn HttpConfigPort>) -> Self {
        Self { http }
    }

    pub fn execute(&self, base: String) {
        tracing::debug!(%base, "Configuring backend base URL");
        self.http.set(HttpOptions { base });
    }
}
