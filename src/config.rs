use leptos::logging::warn;
use serde::{Deserialize, Serialize};

use crate::error::{self, LightboxError};
use crate::transition::AnimationTiming;

pub const LOCALSTORAGE_KEY: &str = "image-lightbox-config";

/// Sizing, breakpoint and timing knobs for the dialog.
///
/// Every field has a default, so a stored config only needs the keys it
/// overrides.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct LightboxConfig {
    pub mobile_base_width: f64,
    pub desktop_base_width: f64,
    pub mobile_max_height: f64,
    pub desktop_max_height: f64,
    /// Windows narrower than this get the compact control bar.
    pub compact_breakpoint: f64,
    /// Widest window still treated as mobile by the demo app.
    pub mobile_max_width: f64,
    pub close_on_backdrop: bool,
    pub timing: AnimationTiming,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            mobile_base_width: 300.0,
            desktop_base_width: 500.0,
            mobile_max_height: 250.0,
            desktop_max_height: 500.0,
            compact_breakpoint: 769.0,
            mobile_max_width: 768.0,
            close_on_backdrop: false,
            timing: AnimationTiming::default(),
        }
    }
}

impl LightboxConfig {
    pub fn from_json(json: &str) -> Result<Self, LightboxError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn read_stored_config() -> Result<Option<String>, LightboxError> {
    let storage = error::window()?.local_storage().ok().flatten();
    Ok(storage.and_then(|s| s.get_item(LOCALSTORAGE_KEY).ok().flatten()))
}

/// Config from `localStorage`, falling back to defaults when absent or broken.
pub fn load_config() -> LightboxConfig {
    match read_stored_config() {
        Ok(Some(json)) => LightboxConfig::from_json(&json).unwrap_or_else(|e| {
            warn!("ignoring stored lightbox config: {e}");
            LightboxConfig::default()
        }),
        Ok(None) => LightboxConfig::default(),
        Err(e) => {
            warn!("lightbox config unavailable: {e}");
            LightboxConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_dialog_dimensions() {
        let config = LightboxConfig::default();
        assert_eq!(config.mobile_base_width, 300.0);
        assert_eq!(config.desktop_base_width, 500.0);
        assert_eq!(config.compact_breakpoint, 769.0);
        assert!(!config.close_on_backdrop);
    }

    #[test]
    fn empty_object_is_default() {
        let config = LightboxConfig::from_json("{}").unwrap();
        assert_eq!(config, LightboxConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config =
            LightboxConfig::from_json(r#"{"close_on_backdrop": true, "timing": {"exit_ms": 150}}"#)
                .unwrap();
        assert!(config.close_on_backdrop);
        assert_eq!(config.timing.exit_ms, 150);
        assert_eq!(config.timing.enter_ms, AnimationTiming::default().enter_ms);
        assert_eq!(config.desktop_base_width, 500.0);
    }

    #[test]
    fn invalid_json_is_config_error() {
        let result = LightboxConfig::from_json("not json");
        assert!(matches!(result, Err(LightboxError::Config(_))));
    }

    #[test]
    fn wrong_field_type_is_config_error() {
        let result = LightboxConfig::from_json(r#"{"mobile_base_width": "wide"}"#);
        assert!(matches!(result, Err(LightboxError::Config(_))));
    }

    #[test]
    fn serde_round_trip() {
        let mut config = LightboxConfig::default();
        config.compact_breakpoint = 900.0;
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(LightboxConfig::from_json(&json).unwrap(), config);
    }
}
