//! Engine tunables parsed from environment variables or a JSON settings blob.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{CIRCLE_MIN_SIDE, CROP_EDGE_THRESHOLD_PX, HANDLE_RADIUS_PX, MIN_SIZE, MIN_VISIBLE_CROP};

pub const ENV_MIN_SIZE: &str = "CANVAS_GEOMETRY_MIN_SIZE";
pub const ENV_CIRCLE_MIN_SIDE: &str = "CANVAS_GEOMETRY_CIRCLE_MIN_SIDE";
pub const ENV_CROP_EDGE_PX: &str = "CANVAS_GEOMETRY_CROP_EDGE_PX";
pub const ENV_MIN_VISIBLE_CROP: &str = "CANVAS_GEOMETRY_MIN_VISIBLE_CROP";
pub const ENV_HANDLE_RADIUS_PX: &str = "CANVAS_GEOMETRY_HANDLE_RADIUS_PX";

/// Errors produced while loading an [`EngineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A value could not be parsed as a number.
    #[error("config parse failed: {key}={value:?}")]
    Parse { key: String, value: String },

    /// A value parsed but is out of range.
    #[error("invalid config value: {key}={value} ({reason})")]
    Invalid { key: &'static str, value: f64, reason: &'static str },

    /// The JSON settings document is malformed.
    #[error("config json parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Thresholds used by gesture sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum frame width/height for handle resizes, in world units.
    pub min_size: f64,
    /// Minimum circle side for outline drags, in world units.
    pub circle_min_side: f64,
    /// Crop edge grab distance, in screen pixels.
    pub crop_edge_threshold_px: f64,
    /// Smallest visible fraction left between opposing crop insets.
    pub min_visible_crop: f64,
    /// Resize handle grab radius, in screen pixels.
    pub handle_radius_px: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            circle_min_side: CIRCLE_MIN_SIDE,
            crop_edge_threshold_px: CROP_EDGE_THRESHOLD_PX,
            min_visible_crop: MIN_VISIBLE_CROP,
            handle_radius_px: HANDLE_RADIUS_PX,
        }
    }
}

impl EngineConfig {
    /// Build config from environment variables.
    ///
    /// All optional; unset variables keep their defaults:
    /// - `CANVAS_GEOMETRY_MIN_SIZE`: default 0.01
    /// - `CANVAS_GEOMETRY_CIRCLE_MIN_SIDE`: default 10
    /// - `CANVAS_GEOMETRY_CROP_EDGE_PX`: default 18
    /// - `CANVAS_GEOMETRY_MIN_VISIBLE_CROP`: default 0.01, must be below 1
    /// - `CANVAS_GEOMETRY_HANDLE_RADIUS_PX`: default 8
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but is not a positive,
    /// finite number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            min_size: env_parse_f64(ENV_MIN_SIZE, defaults.min_size)?,
            circle_min_side: env_parse_f64(ENV_CIRCLE_MIN_SIDE, defaults.circle_min_side)?,
            crop_edge_threshold_px: env_parse_f64(ENV_CROP_EDGE_PX, defaults.crop_edge_threshold_px)?,
            min_visible_crop: env_parse_f64(ENV_MIN_VISIBLE_CROP, defaults.min_visible_crop)?,
            handle_radius_px: env_parse_f64(ENV_HANDLE_RADIUS_PX, defaults.handle_radius_px)?,
        }
        .validated()?;

        info!(
            min_size = config.min_size,
            circle_min_side = config.circle_min_side,
            crop_edge_threshold_px = config.crop_edge_threshold_px,
            "geometry config loaded from environment"
        );
        Ok(config)
    }

    /// Parse config from a JSON object; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON or out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validated()
    }

    /// Check every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validated(self) -> Result<Self, ConfigError> {
        require_positive("min_size", self.min_size)?;
        require_positive("circle_min_side", self.circle_min_side)?;
        require_positive("crop_edge_threshold_px", self.crop_edge_threshold_px)?;
        require_positive("min_visible_crop", self.min_visible_crop)?;
        require_positive("handle_radius_px", self.handle_radius_px)?;
        if self.min_visible_crop >= 1.0 {
            return Err(ConfigError::Invalid {
                key: "min_visible_crop",
                value: self.min_visible_crop,
                reason: "must be below 1",
            });
        }
        Ok(self)
    }
}

fn require_positive(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { key, value, reason: "must be positive and finite" })
    }
}

fn env_parse_f64(key: &str, default: f64) -> Result<f64, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::Parse { key: key.to_string(), value: raw.clone() }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
