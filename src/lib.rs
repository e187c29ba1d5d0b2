//! # appshell
//!
//! Composition root for the application shell: configuration loading,
//! tracing setup, dependency wiring, and the bootstrap run sequence.

pub mod bootstrap;
