//! # Pure Data Module - Configuration DTO Only
//!
//! ## Responsibilities
//!
//! - Define the bootstrap configuration data structure
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - **No validation logic**
//! - **No business rules**
//!
//! ## Iron Rule
//!
//! > **This module contains data only. Whatever is in the file is a fact.**
//!
//! In particular, a malformed backend URL is accepted as-is; it surfaces
//! as whatever failure the HTTP client produces on first use.

/// Bootstrap configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin for relative HTTP requests (may be empty or
    /// malformed - this is a fact, not an error)
    pub backend_base_url: String,

    /// Anchor identifier the root UI component is mounted at
    pub root_anchor: String,

    /// Whether the UI framework's non-production startup banner is shown
    pub startup_banner: bool,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// **Prohibited**: this method must NOT contain any validation
    /// logic. Empty strings are valid "facts"; missing sections map to
    /// empty values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            backend_base_url: toml_value
                .get("backend")
                .and_then(|b| b.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            root_anchor: toml_value
                .get("ui")
                .and_then(|u| u.get("root_anchor"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            startup_banner: toml_value
                .get("ui")
                .and_then(|u| u.get("startup_banner"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create an empty AppConfig (all empty/default values).
    ///
    /// **Note**: this is a pure data constructor with "empty" as valid facts.
    pub fn empty() -> Self {
        Self {
            backend_base_url: String::new(),
            root_anchor: String::new(),
            startup_banner: false,
        }
    }

    /// Create the AppConfig the shell ships with when no config file is
    /// present: the fixed backend endpoint, the `#app` anchor, and the
    /// startup banner suppressed.
    pub fn with_shipped_defaults() -> Self {
        Self {
            backend_base_url: "http://10.0.0.113:8000".to_string(),
            root_anchor: "#app".to_string(),
            startup_banner: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_returns_empty_values_when_missing() {
        let toml_value: toml::Value = toml::from_str("").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.backend_base_url, "");
        assert_eq!(config.root_anchor, "");
        assert!(!config.startup_banner);
    }

    #[test]
    fn from_toml_parses_fields_when_present() {
        let toml_value: toml::Value = toml::from_str(
            r##"
            [backend]
            base_url = "http://10.0.0.113:8000"

            [ui]
            root_anchor = "#app"
            startup_banner = true
        "##,
        )
        .unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.backend_base_url, "http://10.0.0.113:8000");
        assert_eq!(config.root_anchor, "#app");
        assert!(config.startup_banner);
    }

    #[test]
    fn from_toml_does_not_validate_base_url() {
        // "not a url" is accepted as a fact; it fails later at the
        // HTTP client, not here.
        let toml_value: toml::Value = toml::from_str(
            r#"
            [backend]
            base_url = "not a url"
        "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.backend_base_url, "not a url");
    }

    #[test]
    fn shipped_defaults_carry_the_fixed_endpoint() {
        let config = AppConfig::with_shipped_defaults();

        assert_eq!(config.backend_base_url, "http://10.0.0.113:8000");
        assert_eq!(config.root_anchor, "#app");
        assert!(!config.startup_banner);
    }
}
