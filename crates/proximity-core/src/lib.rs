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

//! Aircraft proximity evaluation over WGS-84 positions.
//!
//! This library computes 3D distances between geographic positions and
//! compares them against an alerting threshold. It is organized in
//! small layers that can be used independently or composed together:
//!
//! - **Position layer**: [`GeoPosition`] with coordinate validation and
//!   the [`PositionError`] taxonomy
//! - **Geodesic layer**: WGS-84 inverse geodesic surface distance and
//!   the 3D composition with elevation
//! - **Evaluation layer**: [`ProximityEvaluator`] and the one-shot
//!   [`is_within_proximity`] check
//!
//! # Quick Start
//!
//! ```
//! use proximity_core::{GeoPosition, ProximityEvaluator};
//!
//! # fn main() -> Result<(), proximity_core::PositionError> {
//! let ground_unit = GeoPosition::new(27.6230, 95.3630, 590.0)?;
//! let aircraft = GeoPosition::new(27.6232, 95.3631, 590.0)?;
//!
//! let evaluator = ProximityEvaluator::default();
//! let result = evaluator.evaluate(&ground_unit, &aircraft)?;
//! if result.within_threshold {
//!     println!("aircraft within {:.1} m", result.distance_m);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Using Individual Layers
//!
//! Distances can be computed without an evaluator:
//!
//! ```
//! use proximity_core::{geodesic, GeoPosition};
//!
//! # fn main() -> Result<(), proximity_core::PositionError> {
//! let a = GeoPosition::new(0.0, 0.0, 0.0)?;
//! let b = GeoPosition::new(0.0, 0.0, 1500.0)?;
//! let distance = geodesic::distance_3d_m(&a, &b)?;
//! assert!((distance - 1500.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! And a single check needs no evaluator state at all:
//!
//! ```
//! use proximity_core::{is_within_proximity, GeoPosition};
//!
//! # fn main() -> Result<(), proximity_core::PositionError> {
//! let unit = GeoPosition::new(27.6230, 95.3630, 590.0)?;
//! let other = GeoPosition::new(27.6232, 95.3631, 590.0)?;
//! assert!(is_within_proximity(&unit, &other, 1000.0)?);
//! # Ok(())
//! # }
//! ```

pub mod evaluator;
pub mod geodesic;
pub mod position;

pub use evaluator::{
    is_within_proximity, ProximityEvaluator, ProximityResult, DEFAULT_PROXIMITY_THRESHOLD_M,
};
pub use geodesic::{distance_3d_m, surface_distance_m};
pub use position::{GeoPosition, PositionError};
