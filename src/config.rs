// Copyright 2026 Skyguard Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application configuration management.
//!
//! This module handles persistent configuration storage in TOML format:
//! the alerting threshold, the default alert target, the fixed ground
//! unit position, and optional alert delivery settings (CSV log path,
//! webhook URL). Every field has a default so a missing or partial
//! config file still loads.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use proximity_core::{GeoPosition, PositionError, DEFAULT_PROXIMITY_THRESHOLD_M};

use crate::alerts::AlertTarget;

/// Application name used for the config directory and file.
pub const APP_NAME: &str = "skyguard";

/// A proximity threshold that is not a usable number of meters.
#[derive(Debug, Error, PartialEq)]
#[error("invalid proximity threshold: {value} (must be a finite, non-negative number of meters)")]
pub struct ThresholdError {
    /// The rejected value.
    pub value: f64,
}

/// Checks that a threshold is finite and non-negative, returning it unchanged.
///
/// Zero is valid: it alerts only on exactly coincident positions.
pub fn validate_threshold(threshold_m: f64) -> Result<f64, ThresholdError> {
    if threshold_m.is_finite() && threshold_m >= 0.0 {
        Ok(threshold_m)
    } else {
        Err(ThresholdError { value: threshold_m })
    }
}

/// Fixed position of the ground unit being protected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundUnitConfig {
    /// Latitude in decimal degrees (WGS-84)
    pub latitude: f64,

    /// Longitude in decimal degrees (WGS-84)
    pub longitude: f64,

    /// Elevation above the ellipsoid in meters
    pub elevation_m: f64,
}

impl GroundUnitConfig {
    /// Convert to a validated position.
    pub fn to_position(self) -> Result<GeoPosition, PositionError> {
        GeoPosition::new(self.latitude, self.longitude, self.elevation_m)
    }
}

/// Application configuration stored in TOML format
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Proximity alert threshold in meters
    #[serde(default = "default_threshold")]
    pub threshold_m: f64,

    /// Which party alerts are addressed to
    #[serde(default = "default_notify")]
    pub notify: AlertTarget,

    /// Ground unit position; can be overridden on the command line
    #[serde(default)]
    pub ground_unit: Option<GroundUnitConfig>,

    /// Append-only CSV alert log path
    #[serde(default)]
    pub alert_log: Option<PathBuf>,

    /// Webhook endpoint to POST alerts to
    #[serde(default)]
    pub webhook_url: Option<String>,
}

// Default value functions for serde
fn default_threshold() -> f64 {
    DEFAULT_PROXIMITY_THRESHOLD_M
}

fn default_notify() -> AlertTarget {
    AlertTarget::GroundUnit
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            threshold_m: default_threshold(),
            notify: default_notify(),
            ground_unit: None,
            alert_log: None,
            webhook_url: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, creating a default file if absent
    pub fn load() -> Result<Self, confy::ConfyError> {
        confy::load(APP_NAME, "config")
    }

    /// Save configuration to disk
    #[allow(dead_code)]
    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, "config", self)
    }

    /// Get the config file path for display to user
    pub fn get_config_path() -> Result<PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, "config")
    }
}
