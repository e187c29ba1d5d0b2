//! # shell-infra
//!
//! Infrastructure adapters for the appshell bootstrap: the
//! reqwest-backed shared HTTP client, the in-memory lifecycle status
//! store, and the logging stand-in for the opaque UI framework.

pub mod http;
pub mod lifecycle;
pub mod ui;

pub use http::BackendClient;
pub use lifecycle::InMemoryLifecycleStatus;
pub use ui::LoggingUi;
