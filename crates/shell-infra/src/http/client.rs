//! Shared HTTP client backed by reqwest.
//!
//! Relative request paths resolve against the base origin stored in the
//! shared configuration record. Retry and timeout behavior is whatever
//! reqwest does by default; the shell does not add a policy on top.

use anyhow::Context;
use shell_core::ports::HttpConfigPort;
use shell_core::{HttpOptions, SharedHttpOptions};

/// The shared HTTP client.
///
/// Configured once through [`HttpConfigPort::set`] during the
/// synchronous bootstrap phase; every request issued afterwards reads
/// the stored base. The base is never validated here - a malformed
/// value fails inside reqwest on first use.
pub struct BackendClient {
    http: reqwest::Client,
    options: SharedHttpOptions,
}

impl BackendClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            options: SharedHttpOptions::new(),
        }
    }

    /// Resolve a request path against the configured base origin.
    ///
    /// Absolute URLs pass through untouched; relative paths are joined
    /// onto the base with exactly one separating slash.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.options.get().base;
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Issue a GET request against the configured origin.
    pub async fn get(&self, path: &str) -> anyhow::Result<reqwest::Response> {
        let url = self.resolve(path);
        tracing::debug!(%url, "GET");
        self.http
            .get(url.as_str())
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))
    }

    /// Issue a GET request and deserialize the JSON response body.
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = self.resolve(path);
        let response = self.get(path).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("GET {url} returned a non-JSON body"))
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConfigPort for BackendClient {
    fn set(&self, options: HttpOptions) {
        self.options.set(options);
    }

    fn options(&self) -> HttpOptions {
        self.options.get()
    }
}
