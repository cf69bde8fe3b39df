//! Picker configuration.
//!
//! Everything here is presentational tuning; the state machine is correct
//! with any accepted values (a zero transition delay simply skips the
//! animation). Validation exists so embedders fail fast on nonsense instead
//! of shipping a selector that feels broken.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default drill-down transition time, in milliseconds.
pub const DEFAULT_TRANSITION_DELAY_MS: u64 = 150;

/// Upper bound on the transition delay. Anything slower reads as the
/// selector hanging, not animating.
pub const MAX_TRANSITION_DELAY_MS: u64 = 1000;

/// Tunables for one picker instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PickerConfig {
    /// How long the drill-down transition plays, in milliseconds. The
    /// embedder schedules the wait; the state machine only hands the value
    /// back via [`PickerConfig::transition_delay`].
    pub transition_delay_ms: u64,

    /// Auto-clear time for user-facing warnings, in milliseconds.
    /// `None` keeps a warning until the next action clears it.
    pub status_ttl_ms: Option<u64>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: DEFAULT_TRANSITION_DELAY_MS,
            status_ttl_ms: None,
        }
    }
}

impl PickerConfig {
    /// Transition delay as a [`Duration`].
    #[must_use]
    pub const fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    /// Warning auto-clear TTL as a [`Duration`], if configured.
    #[must_use]
    pub fn status_ttl(&self) -> Option<Duration> {
        self.status_ttl_ms.map(Duration::from_millis)
    }
}

/// A rejected tunable: which field, and why it was refused.
///
/// Reported per field so an embedder can point at the offending entry in
/// its own settings UI instead of surfacing one opaque failure.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Field name as it appears in the serialized config
    pub field: String,
    /// What was wrong with the value
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Checkable embedder-supplied settings.
///
/// Only [`PickerConfig`] implements this today; it stays a trait so a page
/// embedding several widgets can run one validation pass over all of them.
pub trait Validatable {
    /// Every rejected field; empty means the value is usable as-is.
    fn validate(&self) -> Vec<ConfigError>;

    /// Whether [`validate`](Self::validate) found nothing to reject.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for PickerConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.transition_delay_ms > MAX_TRANSITION_DELAY_MS {
            errors.push(ConfigError {
                field: "transition_delay_ms".to_string(),
                message: format!(
                    "Transition delay must be at most {MAX_TRANSITION_DELAY_MS}ms, got {}",
                    self.transition_delay_ms
                ),
            });
        }

        if self.status_ttl_ms == Some(0) {
            errors.push(ConfigError {
                field: "status_ttl_ms".to_string(),
                message: "Warning TTL of 0 would clear warnings before anyone sees them; \
                          use null to keep warnings until the next action"
                    .to_string(),
            });
        }

        errors
    }
}

/// Generate the JSON Schema for [`PickerConfig`].
#[must_use]
pub fn generate_config_schema() -> String {
    let schema = schemars::schema_for!(PickerConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PickerConfig::default();
        assert!(config.is_valid());
        assert_eq!(config.transition_delay(), Duration::from_millis(150));
        assert_eq!(config.status_ttl(), None);
    }

    #[test]
    fn test_excessive_delay_rejected() {
        let config = PickerConfig {
            transition_delay_ms: 5000,
            ..PickerConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "transition_delay_ms");
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let config = PickerConfig {
            status_ttl_ms: Some(0),
            ..PickerConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_deserialize_with_partial_fields() {
        let config: PickerConfig = serde_json::from_str(r#"{"transition_delay_ms": 0}"#).unwrap();
        assert_eq!(config.transition_delay_ms, 0);
        assert_eq!(config.status_ttl_ms, None);
        assert!(config.is_valid(), "zero delay means no animation, still valid");
    }

    #[test]
    fn test_config_schema_mentions_fields() {
        let schema = generate_config_schema();
        assert!(schema.contains("transition_delay_ms"));
        assert!(schema.contains("status_ttl_ms"));
    }
}
