//! Port interfaces for the application layer
//!
//! Ports define the contract between the bootstrap logic (use cases)
//! and infrastructure implementations. This follows Hexagonal
//! Architecture principles: the shell's sequencing logic stays
//! independent of the concrete HTTP client and UI framework, which the
//! source treated as opaque collaborators.

pub mod http_config;
pub mod lifecycle_status;
pub mod ui;

pub use http_config::HttpConfigPort;
pub use lifecycle_status::LifecycleStatusPort;
pub use ui::{MountError, UiFrameworkPort};
