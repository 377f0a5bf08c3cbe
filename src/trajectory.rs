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

//! Aircraft trajectory loading.
//!
//! Trajectories arrive as CSV files with one row per recorded sample.
//! The required columns carry WGS-84 coordinates and ellipsoidal
//! elevation; extra columns are ignored. Files without all required
//! columns are rejected up front with the missing names listed.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use proximity_core::{GeoPosition, PositionError};

/// Required latitude column header.
pub const LATITUDE_COLUMN: &str = "latitude_wgs84(deg)";
/// Required longitude column header.
pub const LONGITUDE_COLUMN: &str = "longitude_wgs84(deg)";
/// Required elevation column header.
pub const ELEVATION_COLUMN: &str = "elevation_wgs84(m)";

const REQUIRED_COLUMNS: [&str; 3] = [LATITUDE_COLUMN, LONGITUDE_COLUMN, ELEVATION_COLUMN];

/// Errors raised while loading a trajectory file.
#[derive(Debug, Error)]
pub enum TrajectoryError {
    /// The file could not be opened or read.
    #[error("failed to read trajectory file: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be parsed as CSV or its values did not fit the schema.
    #[error("failed to parse trajectory CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one or more required columns.
    #[error("trajectory CSV is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// One recorded aircraft position sample.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TrajectorySample {
    /// Latitude in decimal degrees (WGS-84)
    #[serde(rename = "latitude_wgs84(deg)")]
    pub latitude: f64,

    /// Longitude in decimal degrees (WGS-84)
    #[serde(rename = "longitude_wgs84(deg)")]
    pub longitude: f64,

    /// Elevation above the ellipsoid in meters
    #[serde(rename = "elevation_wgs84(m)")]
    pub elevation_m: f64,
}

impl TrajectorySample {
    /// Convert to a validated position.
    pub fn to_position(self) -> Result<GeoPosition, PositionError> {
        GeoPosition::new(self.latitude, self.longitude, self.elevation_m)
    }
}

/// Read trajectory samples from any CSV source.
///
/// The header row is checked before any rows are parsed, so a file with
/// the wrong schema fails fast with every missing column named.
pub fn read_trajectory<R: Read>(reader: R) -> Result<Vec<TrajectorySample>, TrajectoryError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?;
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(TrajectoryError::MissingColumns(missing));
    }

    let mut samples = Vec::new();
    for result in csv_reader.deserialize() {
        let sample: TrajectorySample = result?;
        samples.push(sample);
    }

    Ok(samples)
}

/// Load trajectory samples from a CSV file
pub fn load_trajectory<P: AsRef<Path>>(path: P) -> Result<Vec<TrajectorySample>, TrajectoryError> {
    let file = File::open(path)?;
    let samples = read_trajectory(BufReader::new(file))?;
    info!("Loaded {} trajectory samples", samples.len());
    Ok(samples)
}
