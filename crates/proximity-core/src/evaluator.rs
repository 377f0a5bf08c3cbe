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

//! Threshold-based proximity evaluation.

use crate::geodesic::distance_3d_m;
use crate::position::{GeoPosition, PositionError};

/// Default alerting threshold in meters.
pub const DEFAULT_PROXIMITY_THRESHOLD_M: f64 = 1000.0;

/// Outcome of a single proximity evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityResult {
    /// 3D distance between the two positions, in meters.
    pub distance_m: f64,
    /// Whether the distance is within (inclusive of) the threshold.
    pub within_threshold: bool,
}

/// Evaluates pairs of positions against a fixed distance threshold.
///
/// The comparison is inclusive: a distance exactly equal to the
/// threshold counts as within proximity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityEvaluator {
    threshold_m: f64,
}

impl ProximityEvaluator {
    /// Creates an evaluator with the given threshold in meters.
    ///
    /// The threshold is taken as-is; callers that accept thresholds from
    /// configuration or the command line should validate them first.
    #[must_use]
    pub fn new(threshold_m: f64) -> Self {
        Self { threshold_m }
    }

    /// The threshold this evaluator compares against, in meters.
    #[must_use]
    pub fn threshold_m(&self) -> f64 {
        self.threshold_m
    }

    /// Computes the 3D distance between `unit` and `other` and compares
    /// it against the threshold.
    pub fn evaluate(
        &self,
        unit: &GeoPosition,
        other: &GeoPosition,
    ) -> Result<ProximityResult, PositionError> {
        let distance_m = distance_3d_m(unit, other)?;
        Ok(ProximityResult {
            distance_m,
            within_threshold: distance_m <= self.threshold_m,
        })
    }

    /// Like [`evaluate`](Self::evaluate), but returns only the boolean verdict.
    pub fn is_within(
        &self,
        unit: &GeoPosition,
        other: &GeoPosition,
    ) -> Result<bool, PositionError> {
        Ok(self.evaluate(unit, other)?.within_threshold)
    }
}

impl Default for ProximityEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_PROXIMITY_THRESHOLD_M)
    }
}

/// One-shot proximity check between two positions.
///
/// Equivalent to `ProximityEvaluator::new(threshold_m).is_within(unit, other)`.
pub fn is_within_proximity(
    unit: &GeoPosition,
    other: &GeoPosition,
    threshold_m: f64,
) -> Result<bool, PositionError> {
    Ok(distance_3d_m(unit, other)? <= threshold_m)
}
