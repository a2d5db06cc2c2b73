// src/config.rs
//
// Interaction settings. Every field has a default matching the live site, so
// an empty JSON object (or no file at all) is a valid configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub form: FormConfig,
    pub scroll: ScrollConfig,
    pub visibility: VisibilityConfig,
}

/// Contact-form relay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub endpoint: String,
    pub redirect_location: String,
    pub request_timeout_secs: u64,
    pub generic_error_message: String,
    pub fallback_rejection_message: String,
    pub rejection_prefix: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.web3forms.com/submit".to_string(),
            redirect_location: "thanks.html".to_string(),
            request_timeout_secs: 30,
            generic_error_message: "Something went wrong. Please try again later.".to_string(),
            fallback_rejection_message: "Unknown error".to_string(),
            rejection_prefix: "Error: ".to_string(),
        }
    }
}

impl FormConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// ~60fps
    pub throttle_ms: u64,
    pub navbar_threshold_px: f64,
    pub reveal_offset_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 16,
            navbar_threshold_px: 100.0,
            reveal_offset_px: 150.0,
        }
    }
}

impl ScrollConfig {
    pub fn throttle_delay(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub animate_threshold: f64,
    /// Handed through to the environment's visibility observer as-is
    pub animate_root_margin: String,
    pub progress_threshold: f64,
    pub progress_restore_delay_ms: u64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            animate_threshold: 0.1,
            animate_root_margin: "0px 0px -50px 0px".to_string(),
            progress_threshold: 0.5,
            progress_restore_delay_ms: 100,
        }
    }
}

impl VisibilityConfig {
    pub fn progress_restore_delay(&self) -> Duration {
        Duration::from_millis(self.progress_restore_delay_ms)
    }
}

impl InteractionConfig {
    /// Parse from JSON; absent keys keep their defaults
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.form.endpoint.trim().is_empty() {
            return Err(AppError::Config("form.endpoint must not be empty".to_string()));
        }
        if self.form.redirect_location.trim().is_empty() {
            return Err(AppError::Config(
                "form.redirect_location must not be empty".to_string(),
            ));
        }
        if self.form.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "form.request_timeout_secs must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("visibility.animate_threshold", self.visibility.animate_threshold),
            ("visibility.progress_threshold", self.visibility.progress_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AppError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_site() {
        let config = InteractionConfig::default();
        assert_eq!(config.form.endpoint, "https://api.web3forms.com/submit");
        assert_eq!(config.form.redirect_location, "thanks.html");
        assert_eq!(config.scroll.throttle_delay(), Duration::from_millis(16));
        assert_eq!(config.visibility.progress_restore_delay(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = InteractionConfig::from_json_str(
            r#"{ "form": { "redirect_location": "index.html" }, "scroll": { "throttle_ms": 50 } }"#,
        )
        .unwrap();

        assert_eq!(config.form.redirect_location, "index.html");
        assert_eq!(config.form.endpoint, "https://api.web3forms.com/submit");
        assert_eq!(config.scroll.throttle_ms, 50);
        assert_eq!(config.scroll.navbar_threshold_px, 100.0);
    }

    #[test]
    fn test_rejects_empty_endpoint() {
        let err =
            InteractionConfig::from_json_str(r#"{ "form": { "endpoint": " " } }"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let json = r#"{ "visibility": { "progress_threshold": 1.5 } }"#;
        let err = InteractionConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = InteractionConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "form": {{ "request_timeout_secs": 5 }} }}"#).unwrap();

        let config = InteractionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.form.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InteractionConfig::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
