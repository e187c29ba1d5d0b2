use crate::http::HttpOptions;

/// Configuration surface of the shared HTTP client.
///
/// One write operation, `set(options)`. The client's retry, timeout,
/// and error behavior is the collaborator's own business.
pub trait HttpConfigPort: Send + Sync {
    /// Store the options; all subsequent relative requests issued
    /// through the client resolve against `options.base`.
    fn set(&self, options: HttpOptions);

    /// Snapshot the currently stored options.
    fn options(&self) -> HttpOptions;
}
