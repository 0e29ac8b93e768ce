//! Defaults applied by record builders and collaborator wrappers.

use crate::wizard::FinalizePolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_MS: u64 = 3_000;

/// Errors raised while loading a [`WizardConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Wizard-wide settings.
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
///
/// # Example
///
/// ```rust
/// use trailhead::config::WizardConfig;
///
/// let config = WizardConfig::from_json_str(r#"{ "default_period": "wk" }"#).unwrap();
/// assert_eq!(config.default_period, "wk");
/// assert_eq!(config.placeholder_image, "photo-placeholder");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Upper bound for any single collaborator call
    pub collaborator_timeout_ms: u64,
    /// Image shown for records created without photos
    pub placeholder_image: String,
    /// Rent cadence used when none was entered
    pub default_period: String,
    /// Badges given to housing spots created without any
    pub housing_badges: Vec<String>,
    /// Tags given to roommate profiles created without any
    pub roommate_tags: Vec<String>,
    /// Which guards are re-checked before a record is built
    pub finalize_policy: FinalizePolicy,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            collaborator_timeout_ms: DEFAULT_TIMEOUT_MS,
            placeholder_image: "photo-placeholder".into(),
            default_period: "mo".into(),
            housing_badges: vec!["Furnished".into(), "Near metro".into()],
            roommate_tags: vec!["Friendly".into(), "Clean".into(), "Flexible".into()],
            finalize_policy: FinalizePolicy::AllSteps,
        }
    }
}

impl WizardConfig {
    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_millis(self.collaborator_timeout_ms)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded wizard config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collaborator_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "collaborator_timeout_ms must be greater than zero".into(),
            ));
        }
        if self.placeholder_image.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "placeholder_image must not be empty".into(),
            ));
        }
        if self.default_period.trim().is_empty() {
            return Err(ConfigError::Invalid("default_period must not be empty".into()));
        }
        Ok(())
    }
}
