//! Encoding and scanning configuration.
//!
//! ```rust
//! use geocell::{Config, Precision};
//!
//! let json = r#"{
//!     "precision": { "bits": 20 },
//!     "scan_limit": 1000
//! }"#;
//! let config = Config::from_json(json)?;
//! assert_eq!(config.precision, Precision::Bits(20));
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::precision::{MAX_BIT_PRECISION, Precision};
use serde::de::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Precision used for encoding and scanning (default: 8 characters).
    #[serde(default)]
    pub precision: Precision,

    /// Maximum number of cells a configured scan yields (None means
    /// unbounded).
    #[serde(default)]
    pub scan_limit: Option<usize>,
}

impl Config {
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_scan_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "Scan limit must be greater than zero");
        self.scan_limit = Some(limit);
        self
    }

    /// Check that the precision fits in 32 bits per axis and that a scan
    /// limit, when set, is non-zero.
    ///
    /// Precision 0 is accepted: its single cell covers the whole world,
    /// the same as an unconfigured `GeohashBits::from_location` call.
    pub fn validate(&self) -> Result<(), String> {
        let bits = self.precision.bit_precision();
        if bits > MAX_BIT_PRECISION {
            return Err(format!(
                "Precision must be at most {} bits per axis, got {}",
                MAX_BIT_PRECISION, bits
            ));
        }

        if self.scan_limit == Some(0) {
            return Err("Scan limit must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Parse geohash settings from JSON. Missing fields take their
    /// defaults; an out-of-range precision or a zero scan limit is
    /// reported as a deserialisation error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    /// Render the precision and scan limit as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse geohash settings from TOML, validated like [`Config::from_json`].
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Render the precision and scan limit as TOML.
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            scan_limit: None,
        }
    }
}
