//! Motion control configuration
//!
//! In-memory only: supplied at construction and patched at runtime
//! (partial JSON objects from the embedding page).

use serde::{Deserialize, Serialize};

use crate::consts::SMOOTHING_RATE_DEFAULT;

/// Paddle motion control configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Interpolate pointer-driven motion instead of jumping to the cursor
    pub enable_smoothing: bool,
    /// Fraction of remaining distance closed per reference frame, [0, 1]
    pub smoothing_rate: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            enable_smoothing: true,
            smoothing_rate: SMOOTHING_RATE_DEFAULT,
        }
    }
}

impl ControlConfig {
    pub fn new(enable_smoothing: bool, smoothing_rate: f32) -> Self {
        Self {
            enable_smoothing,
            smoothing_rate: smoothing_rate.clamp(0.0, 1.0),
        }
    }

    /// Merge a partial config. Out-of-range rates are clamped, not rejected.
    pub fn apply(&mut self, patch: ControlConfigPatch) {
        if let Some(enabled) = patch.enable_smoothing {
            self.enable_smoothing = enabled;
        }
        if let Some(rate) = patch.smoothing_rate {
            self.smoothing_rate = rate.clamp(0.0, 1.0);
        }
    }
}

/// Partial config update; absent fields keep their current value
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfigPatch {
    pub enable_smoothing: Option<bool>,
    pub smoothing_rate: Option<f32>,
}

impl ControlConfigPatch {
    /// Parse a patch from a JSON object (e.g. a `data-control-config`
    /// attribute). Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ControlConfig::default();
        assert!(config.enable_smoothing);
        assert_eq!(config.smoothing_rate, SMOOTHING_RATE_DEFAULT);
    }

    #[test]
    fn test_new_clamps_rate() {
        assert_eq!(ControlConfig::new(true, 1.7).smoothing_rate, 1.0);
        assert_eq!(ControlConfig::new(true, -0.3).smoothing_rate, 0.0);
    }

    #[test]
    fn test_apply_merges_present_fields() {
        let mut config = ControlConfig::default();
        config.apply(ControlConfigPatch {
            smoothing_rate: Some(0.5),
            ..Default::default()
        });
        assert!(config.enable_smoothing);
        assert_eq!(config.smoothing_rate, 0.5);

        config.apply(ControlConfigPatch {
            enable_smoothing: Some(false),
            ..Default::default()
        });
        assert!(!config.enable_smoothing);
        assert_eq!(config.smoothing_rate, 0.5);
    }

    #[test]
    fn test_apply_clamps_rate() {
        let mut config = ControlConfig::default();
        config.apply(ControlConfigPatch {
            smoothing_rate: Some(2.0),
            ..Default::default()
        });
        assert_eq!(config.smoothing_rate, 1.0);
    }

    #[test]
    fn test_patch_from_json() {
        let patch = ControlConfigPatch::from_json(r#"{"smoothing_rate": 0.25}"#).unwrap();
        assert_eq!(patch.smoothing_rate, Some(0.25));
        assert_eq!(patch.enable_smoothing, None);

        // Unknown fields are ignored
        let patch =
            ControlConfigPatch::from_json(r#"{"enable_smoothing": false, "theme": "dark"}"#)
                .unwrap();
        assert_eq!(patch.enable_smoothing, Some(false));

        assert!(ControlConfigPatch::from_json("not json").is_err());
    }
}
