//! # shell-app
//!
//! Use cases for the application shell bootstrap: configuring the
//! shared HTTP client, suppressing startup diagnostics, mounting the
//! root component, and the coordinator that sequences them around the
//! platform readiness signal.

pub mod usecases;

pub use usecases::boot::{BootCoordinator, BootCoordinatorDeps};
