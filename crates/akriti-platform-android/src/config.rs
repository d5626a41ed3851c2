//! Bridge configuration
//!
//! Passed from Java as a JSON string to `HelloWorld.init`. Missing fields
//! take their defaults and unknown fields are ignored, so the app can send
//! `{}` or nothing at all.
//!
//! ```json
//! { "log_level": "debug", "log_tag": "akriti" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Configuration for the Android bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Log level or filter directive ("error" | "warn" | "info" | "debug" | "trace")
    pub log_level: String,
    /// Logcat tag
    pub log_tag: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_tag: "akriti".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parse configuration JSON. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that end up in C strings
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.log_tag.contains('\0') {
            return Err(BridgeError::InvalidArgument("log_tag contains NUL".to_string()));
        }
        Ok(())
    }
}
