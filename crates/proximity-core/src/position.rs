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

//! Geodetic positions and their validation.
//!
//! A [`GeoPosition`] is a latitude/longitude/elevation triple in WGS-84
//! degrees and meters. Validation distinguishes an out-of-range (but
//! finite) coordinate from a malformed position such as a NaN component
//! or a row with the wrong number of fields.

use std::fmt;

use thiserror::Error;

/// Errors raised when a position fails validation.
#[derive(Debug, Error)]
pub enum PositionError {
    /// Latitude or longitude is a finite number outside its valid range.
    #[error("invalid coordinate: {field} {value} is outside {min}..={max} degrees")]
    InvalidCoordinate {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The position itself is malformed: a non-finite component or the
    /// wrong number of components.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

/// Check that a finite coordinate lies inside its degree range.
fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), PositionError> {
    if value < min || value > max {
        return Err(PositionError::InvalidCoordinate {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Check that a component is a finite number.
fn check_finite(field: &'static str, value: f64) -> Result<(), PositionError> {
    if !value.is_finite() {
        return Err(PositionError::InvalidPosition(format!(
            "{field} is not a finite number ({value})"
        )));
    }
    Ok(())
}

/// A geodetic position: latitude/longitude in WGS-84 degrees plus an
/// elevation in meters relative to the reference datum.
///
/// Positions are plain values with no identity beyond their coordinates.
/// [`GeoPosition::new`] validates on construction; positions built from
/// field syntax can be checked later with [`GeoPosition::validate`], and
/// every distance operation in this crate revalidates its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Latitude in degrees, positive north. Valid range [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, positive east. Valid range [-180, 180].
    pub longitude: f64,
    /// Elevation in meters above (or below) the reference datum.
    pub elevation_m: f64,
}

impl GeoPosition {
    /// Create a validated position.
    pub fn new(latitude: f64, longitude: f64, elevation_m: f64) -> Result<Self, PositionError> {
        let position = Self {
            latitude,
            longitude,
            elevation_m,
        };
        position.validate()?;
        Ok(position)
    }

    /// Validate all components.
    ///
    /// Non-finite components fail with [`PositionError::InvalidPosition`];
    /// finite latitude/longitude outside their ranges fail with
    /// [`PositionError::InvalidCoordinate`]. Elevation accepts any finite
    /// value, including negative ones.
    pub fn validate(&self) -> Result<(), PositionError> {
        check_finite("latitude", self.latitude)?;
        check_finite("longitude", self.longitude)?;
        check_finite("elevation", self.elevation_m)?;
        check_range("latitude", self.latitude, -90.0, 90.0)?;
        check_range("longitude", self.longitude, -180.0, 180.0)?;
        Ok(())
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}°, {:.4}°, {:.1} m)",
            self.latitude, self.longitude, self.elevation_m
        )
    }
}

impl TryFrom<(f64, f64, f64)> for GeoPosition {
    type Error = PositionError;

    fn try_from(components: (f64, f64, f64)) -> Result<Self, Self::Error> {
        Self::new(components.0, components.1, components.2)
    }
}

/// Conversion from a row of numbers, as read from tabular sources.
/// Rows with the wrong number of fields fail with
/// [`PositionError::InvalidPosition`].
impl TryFrom<&[f64]> for GeoPosition {
    type Error = PositionError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        match components {
            [latitude, longitude, elevation_m] => Self::new(*latitude, *longitude, *elevation_m),
            other => Err(PositionError::InvalidPosition(format!(
                "expected 3 components (latitude, longitude, elevation), got {}",
                other.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_position() {
        let position = GeoPosition::new(27.6230, 95.3630, 590.0).unwrap();
        assert_eq!(position.latitude, 27.6230);
        assert_eq!(position.longitude, 95.3630);
        assert_eq!(position.elevation_m, 590.0);
    }

    #[test]
    fn test_boundary_coordinates_are_valid() {
        assert!(GeoPosition::new(90.0, 180.0, 0.0).is_ok());
        assert!(GeoPosition::new(-90.0, -180.0, 0.0).is_ok());
    }

    #[test]
    fn test_negative_elevation_is_valid() {
        // Dead Sea shoreline sits below the datum
        assert!(GeoPosition::new(31.5, 35.47, -430.0).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range() {
        let result = GeoPosition::new(91.0, 0.0, 0.0);
        assert!(matches!(
            result,
            Err(PositionError::InvalidCoordinate { field: "latitude", value, .. })
            if value == 91.0
        ));
    }

    #[test]
    fn test_longitude_out_of_range() {
        let result = GeoPosition::new(0.0, -180.5, 0.0);
        assert!(matches!(
            result,
            Err(PositionError::InvalidCoordinate {
                field: "longitude",
                ..
            })
        ));
    }

    #[test]
    fn test_nan_elevation_is_invalid_position() {
        let result = GeoPosition::new(0.0, 0.0, f64::NAN);
        assert!(matches!(result, Err(PositionError::InvalidPosition(_))));
    }

    #[test]
    fn test_infinite_latitude_is_invalid_position() {
        // Non-finite components are malformed, not merely out of range
        let result = GeoPosition::new(f64::INFINITY, 0.0, 0.0);
        assert!(matches!(result, Err(PositionError::InvalidPosition(_))));
    }

    #[test]
    fn test_try_from_slice() {
        let position = GeoPosition::try_from(&[27.6230, 95.3630, 590.0][..]).unwrap();
        assert_eq!(position.latitude, 27.6230);
    }

    #[test]
    fn test_try_from_slice_wrong_arity() {
        let result = GeoPosition::try_from(&[27.6230, 95.3630][..]);
        assert!(matches!(
            result,
            Err(PositionError::InvalidPosition(msg))
            if msg.contains("got 2")
        ));
    }

    #[test]
    fn test_display() {
        let position = GeoPosition::new(27.6230, 95.3630, 590.0).unwrap();
        assert_eq!(position.to_string(), "(27.6230°, 95.3630°, 590.0 m)");
    }
}
