//! Tracing configuration for the application shell.
//!
//! ## Environment Behavior
//!
//! - **Development**: debug level for the shell, stdout output
//! - **Production**: info level, stdout output
//! - `RUST_LOG` overrides the built-in directives entirely

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug level for the shell crates
/// - **Production**: info level
/// - HTTP internals (`hyper`, `reqwest`) are kept at warn either way
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "hyper=warn".to_string(),
        "reqwest=warn".to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Safe to call once per process; a second call reports the underlying
/// subscriber error.
pub fn init() -> anyhow::Result<()> {
    let directives = build_filter_directives(is_development()).join(",");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_directives_default_to_debug() {
        let directives = build_filter_directives(true);
        assert_eq!(directives[0], "debug");
        assert!(directives.iter().any(|d| d == "hyper=warn"));
    }

    #[test]
    fn production_directives_default_to_info() {
        let directives = build_filter_directives(false);
        assert_eq!(directives[0], "info");
    }
}
