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

//! Alert records and delivery.
//!
//! This module provides a trait-based abstraction for extensible alert
//! delivery. A [`ProximityAlert`] describes one threshold violation; an
//! [`AlertSink`] routes it somewhere (memory, a CSV log, a webhook);
//! the [`AlertDispatcher`] fans each alert out to every configured
//! sink. A failing sink is logged and skipped so one broken destination
//! never blocks the others.

mod sinks;

pub use sinks::{CsvLogSink, MemorySink, WebhookSink};

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which party an alert is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AlertTarget {
    /// The ground unit below the aircraft.
    GroundUnit,
    /// The aircraft itself.
    Aircraft,
}

impl AlertTarget {
    /// Human-readable target name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            AlertTarget::GroundUnit => "Ground Unit",
            AlertTarget::Aircraft => "Aircraft",
        }
    }
}

/// One proximity threshold violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProximityAlert {
    /// When the violation was detected.
    pub timestamp: DateTime<Utc>,

    /// Zero-based index of the trajectory sample that triggered the alert.
    pub sample_index: usize,

    /// Aircraft latitude in decimal degrees (WGS-84)
    pub latitude: f64,

    /// Aircraft longitude in decimal degrees (WGS-84)
    pub longitude: f64,

    /// Aircraft elevation above the ellipsoid in meters
    pub elevation_m: f64,

    /// 3D distance between aircraft and ground unit in meters
    pub distance_m: f64,

    /// Threshold the distance was compared against, in meters
    pub threshold_m: f64,

    /// Who the alert is addressed to
    pub notified: AlertTarget,
}

/// Errors that can occur while delivering an alert.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write alert log: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize alert record: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to deliver alert over HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("alert endpoint returned {0}")]
    HttpStatus(reqwest::StatusCode),
}

/// Trait for alert delivery sinks.
///
/// Implement this trait to route alerts to new destinations.
pub trait AlertSink {
    /// Short sink name used in logs.
    fn name(&self) -> &'static str;

    /// Deliver one alert.
    fn record(&mut self, alert: &ProximityAlert) -> Result<(), SinkError>;
}

/// Fans alerts out to every configured sink.
#[derive(Default)]
pub struct AlertDispatcher {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl std::fmt::Debug for AlertDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertDispatcher")
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}

impl AlertDispatcher {
    /// A dispatcher with no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a delivery sink.
    pub fn add_sink(&mut self, sink: Box<dyn AlertSink>) {
        self.sinks.push(sink);
    }

    /// Number of configured sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Deliver an alert to every sink, returning how many accepted it.
    ///
    /// Sink failures are logged and do not stop delivery to the
    /// remaining sinks.
    pub fn dispatch(&mut self, alert: &ProximityAlert) -> usize {
        let mut delivered = 0;
        for sink in &mut self.sinks {
            match sink.record(alert) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    warn!("Alert sink '{}' failed: {}", sink.name(), e);
                }
            }
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_alert() -> ProximityAlert {
        ProximityAlert {
            timestamp: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
            sample_index: 3,
            latitude: 27.6232,
            longitude: 95.3631,
            elevation_m: 590.0,
            distance_m: 24.3,
            threshold_m: 1000.0,
            notified: AlertTarget::GroundUnit,
        }
    }

    struct FailingSink;

    impl AlertSink for FailingSink {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn record(&mut self, _alert: &ProximityAlert) -> Result<(), SinkError> {
            Err(SinkError::Io(std::io::Error::other("sink unavailable")))
        }
    }

    #[test]
    fn test_dispatch_reaches_all_sinks() {
        let mut dispatcher = AlertDispatcher::new();
        dispatcher.add_sink(Box::new(MemorySink::new()));
        dispatcher.add_sink(Box::new(MemorySink::new()));
        assert_eq!(dispatcher.sink_count(), 2);

        let delivered = dispatcher.dispatch(&sample_alert());
        assert_eq!(delivered, 2);
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let mut dispatcher = AlertDispatcher::new();
        dispatcher.add_sink(Box::new(FailingSink));
        dispatcher.add_sink(Box::new(MemorySink::new()));

        let delivered = dispatcher.dispatch(&sample_alert());
        assert_eq!(delivered, 1);
    }

    #[test]
    fn test_empty_dispatcher_delivers_nowhere() {
        let mut dispatcher = AlertDispatcher::new();
        assert_eq!(dispatcher.dispatch(&sample_alert()), 0);
    }

    #[test]
    fn test_target_display_names() {
        assert_eq!(AlertTarget::GroundUnit.display_name(), "Ground Unit");
        assert_eq!(AlertTarget::Aircraft.display_name(), "Aircraft");
    }

    #[test]
    fn test_target_serializes_snake_case() {
        let json = serde_json::to_value(AlertTarget::GroundUnit).unwrap();
        assert_eq!(json, serde_json::json!("ground_unit"));
    }

    #[test]
    fn test_alert_serializes_flat() {
        let value = serde_json::to_value(sample_alert()).unwrap();
        assert_eq!(value["sample_index"], 3);
        assert_eq!(value["notified"], "ground_unit");
        assert_eq!(value["distance_m"], 24.3);
        assert!(value["timestamp"].as_str().unwrap().starts_with("2026-01-15T12:00:00"));
    }
}
