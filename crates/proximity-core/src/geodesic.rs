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

//! WGS-84 geodesic surface distance and 3D distance composition.
//!
//! Surface distances solve the inverse geodesic problem on the WGS-84
//! ellipsoid (Karney's algorithm, via geographiclib), accurate to well
//! under a meter for distances of a few thousand kilometers. The 3D
//! distance composes the surface distance with the elevation delta as
//! perpendicular legs of a right triangle. Alert thresholds are
//! calibrated against that composition, so it must not be replaced with
//! a chord or full 3D geodesic model.

use geographiclib_rs::{Geodesic, InverseGeodesic};
use lazy_static::lazy_static;

use crate::position::{GeoPosition, PositionError};

lazy_static! {
    // Building the model computes coefficient tables, so do it once.
    static ref WGS84: Geodesic = Geodesic::wgs84();
}

/// Geodesic surface distance in meters between two positions, ignoring
/// elevation.
///
/// Both positions are validated; the result is symmetric in its
/// arguments and zero for identical coordinates.
pub fn surface_distance_m(a: &GeoPosition, b: &GeoPosition) -> Result<f64, PositionError> {
    a.validate()?;
    b.validate()?;
    let meters: f64 = WGS84.inverse(a.latitude, a.longitude, b.latitude, b.longitude);
    Ok(meters)
}

/// 3D distance in meters: geodesic surface distance combined with the
/// absolute elevation difference by Euclidean composition,
/// `sqrt(surface² + vertical²)`.
///
/// Fails with [`PositionError::InvalidCoordinate`] for out-of-range
/// latitude/longitude and [`PositionError::InvalidPosition`] for
/// non-finite components. No other failure modes; no side effects.
pub fn distance_3d_m(a: &GeoPosition, b: &GeoPosition) -> Result<f64, PositionError> {
    let surface = surface_distance_m(a, b)?;
    let vertical = (a.elevation_m - b.elevation_m).abs();
    Ok((surface.powi(2) + vertical.powi(2)).sqrt())
}
