//! # shell-core
//!
//! Core domain models and ports for the application shell bootstrap.
//!
//! This crate contains pure bootstrap logic without any infrastructure
//! dependencies: the configuration model, the boot phase state machine,
//! the one-shot platform readiness signal, and the port traits that the
//! infrastructure layer implements.

// Public module exports
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod ports;
pub mod ready;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use http::{HttpOptions, SharedHttpOptions};
pub use lifecycle::BootPhase;
pub use ready::{ready_signal, PlatformReady, ReadyNotifier, SignalLost};
