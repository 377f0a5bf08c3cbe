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

//! Proximity sweep over a recorded trajectory.
//!
//! A sweep walks every trajectory sample in order, evaluates its 3D
//! distance to the ground unit, dispatches an alert for each sample
//! within the threshold, and reports the closest approach seen. An
//! invalid sample aborts the sweep with its row index; errors are never
//! downgraded to a quiet skip.

use chrono::Utc;
use log::info;
use thiserror::Error;

use proximity_core::{GeoPosition, PositionError, ProximityEvaluator};

use crate::alerts::{AlertDispatcher, AlertTarget, ProximityAlert};
use crate::trajectory::TrajectorySample;

/// Errors that abort a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The ground unit position failed validation.
    #[error("invalid ground unit position: {0}")]
    InvalidGroundUnit(#[source] PositionError),

    /// A trajectory sample failed validation.
    #[error("invalid trajectory sample at row {index}: {source}")]
    InvalidSample {
        /// Zero-based row index within the trajectory.
        index: usize,
        #[source]
        source: PositionError,
    },
}

/// The nearest sample seen during a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestApproach {
    /// Zero-based index of the nearest sample. Ties keep the earliest.
    pub sample_index: usize,
    /// 3D distance at that sample, in meters.
    pub distance_m: f64,
}

/// Outcome of a full trajectory sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    /// How many samples were evaluated.
    pub samples_checked: usize,
    /// Alerts raised, in trajectory order.
    pub alerts: Vec<ProximityAlert>,
    /// Closest approach, absent for an empty trajectory.
    pub closest: Option<ClosestApproach>,
}

impl SweepReport {
    /// Number of alerts raised.
    #[must_use]
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }
}

/// Evaluate every sample against the ground unit and dispatch alerts.
///
/// Samples are processed in file order. Each one within the evaluator's
/// threshold produces a [`ProximityAlert`] that is handed to the
/// dispatcher and recorded in the report.
pub fn run_sweep(
    unit: &GeoPosition,
    samples: &[TrajectorySample],
    evaluator: &ProximityEvaluator,
    notify: AlertTarget,
    dispatcher: &mut AlertDispatcher,
) -> Result<SweepReport, SweepError> {
    unit.validate().map_err(SweepError::InvalidGroundUnit)?;

    let mut alerts = Vec::new();
    let mut closest: Option<ClosestApproach> = None;

    for (index, sample) in samples.iter().enumerate() {
        let aircraft = sample
            .to_position()
            .map_err(|source| SweepError::InvalidSample { index, source })?;
        let result = evaluator
            .evaluate(unit, &aircraft)
            .map_err(|source| SweepError::InvalidSample { index, source })?;

        if closest.map_or(true, |c| result.distance_m < c.distance_m) {
            closest = Some(ClosestApproach {
                sample_index: index,
                distance_m: result.distance_m,
            });
        }

        if result.within_threshold {
            info!(
                "Proximity alert: sample {} at {:.1} m (threshold {:.1} m)",
                index,
                result.distance_m,
                evaluator.threshold_m()
            );
            let alert = ProximityAlert {
                timestamp: Utc::now(),
                sample_index: index,
                latitude: sample.latitude,
                longitude: sample.longitude,
                elevation_m: sample.elevation_m,
                distance_m: result.distance_m,
                threshold_m: evaluator.threshold_m(),
                notified: notify,
            };
            dispatcher.dispatch(&alert);
            alerts.push(alert);
        }
    }

    Ok(SweepReport {
        samples_checked: samples.len(),
        alerts,
        closest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{AlertSink, SinkError};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ground_unit() -> GeoPosition {
        GeoPosition::new(27.6230, 95.3630, 590.0).unwrap()
    }

    fn sample(latitude: f64, longitude: f64, elevation_m: f64) -> TrajectorySample {
        TrajectorySample {
            latitude,
            longitude,
            elevation_m,
        }
    }

    /// Sink sharing its store with the test body.
    struct SharedSink(Rc<RefCell<Vec<ProximityAlert>>>);

    impl AlertSink for SharedSink {
        fn name(&self) -> &'static str {
            "shared"
        }

        fn record(&mut self, alert: &ProximityAlert) -> Result<(), SinkError> {
            self.0.borrow_mut().push(alert.clone());
            Ok(())
        }
    }

    #[test]
    fn test_sweep_alerts_only_within_threshold() {
        let samples = [
            sample(27.6232, 95.3631, 590.0),  // ~24 m away
            sample(27.7000, 95.5000, 5000.0), // far outside
        ];
        let mut dispatcher = AlertDispatcher::new();
        let report = run_sweep(
            &ground_unit(),
            &samples,
            &ProximityEvaluator::default(),
            AlertTarget::GroundUnit,
            &mut dispatcher,
        )
        .unwrap();

        assert_eq!(report.samples_checked, 2);
        assert_eq!(report.alert_count(), 1);
        assert_eq!(report.alerts[0].sample_index, 0);
        assert_eq!(report.alerts[0].notified, AlertTarget::GroundUnit);
        assert_eq!(report.alerts[0].threshold_m, 1000.0);
        assert!((22.0..25.0).contains(&report.alerts[0].distance_m));
    }

    #[test]
    fn test_sweep_hands_alerts_to_dispatcher() {
        let delivered = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = AlertDispatcher::new();
        dispatcher.add_sink(Box::new(SharedSink(Rc::clone(&delivered))));

        let samples = [sample(27.6232, 95.3631, 590.0)];
        let report = run_sweep(
            &ground_unit(),
            &samples,
            &ProximityEvaluator::default(),
            AlertTarget::Aircraft,
            &mut dispatcher,
        )
        .unwrap();

        assert_eq!(delivered.borrow().len(), 1);
        assert_eq!(delivered.borrow()[0], report.alerts[0]);
    }

    #[test]
    fn test_empty_trajectory_reports_nothing() {
        let mut dispatcher = AlertDispatcher::new();
        let report = run_sweep(
            &ground_unit(),
            &[],
            &ProximityEvaluator::default(),
            AlertTarget::GroundUnit,
            &mut dispatcher,
        )
        .unwrap();

        assert_eq!(report.samples_checked, 0);
        assert!(report.alerts.is_empty());
        assert!(report.closest.is_none());
    }

    #[test]
    fn test_closest_approach_tracked_without_alerts() {
        let samples = [
            sample(27.7000, 95.5000, 5000.0),
            sample(27.6232, 95.3631, 590.0), // nearest
        ];
        let mut dispatcher = AlertDispatcher::new();
        let report = run_sweep(
            &ground_unit(),
            &samples,
            &ProximityEvaluator::new(10.0),
            AlertTarget::GroundUnit,
            &mut dispatcher,
        )
        .unwrap();

        assert!(report.alerts.is_empty());
        let closest = report.closest.unwrap();
        assert_eq!(closest.sample_index, 1);
        assert!((22.0..25.0).contains(&closest.distance_m));
    }

    #[test]
    fn test_closest_tie_keeps_earliest_sample() {
        let samples = [
            sample(27.6232, 95.3631, 590.0),
            sample(27.6232, 95.3631, 590.0),
        ];
        let mut dispatcher = AlertDispatcher::new();
        let report = run_sweep(
            &ground_unit(),
            &samples,
            &ProximityEvaluator::new(0.0),
            AlertTarget::GroundUnit,
            &mut dispatcher,
        )
        .unwrap();

        assert_eq!(report.closest.unwrap().sample_index, 0);
    }

    #[test]
    fn test_invalid_sample_aborts_with_row_index() {
        let samples = [
            sample(27.6232, 95.3631, 590.0),
            sample(95.0, 95.3631, 590.0), // latitude out of range
        ];
        let mut dispatcher = AlertDispatcher::new();
        let err = run_sweep(
            &ground_unit(),
            &samples,
            &ProximityEvaluator::default(),
            AlertTarget::GroundUnit,
            &mut dispatcher,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SweepError::InvalidSample {
                index: 1,
                source: PositionError::InvalidCoordinate { field: "latitude", .. },
            }
        ));
    }

    #[test]
    fn test_invalid_ground_unit_is_rejected() {
        let bad_unit = GeoPosition {
            latitude: 0.0,
            longitude: 200.0,
            elevation_m: 0.0,
        };
        let mut dispatcher = AlertDispatcher::new();
        let err = run_sweep(
            &bad_unit,
            &[sample(0.0, 0.0, 0.0)],
            &ProximityEvaluator::default(),
            AlertTarget::GroundUnit,
            &mut dispatcher,
        )
        .unwrap_err();

        assert!(matches!(err, SweepError::InvalidGroundUnit(_)));
    }
}
