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

//! Built-in alert sinks: in-memory, append-only CSV log, and webhook.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::Duration;

use super::{AlertSink, ProximityAlert, SinkError};

/// Collects alerts in memory.
///
/// Used by tests and by callers that want to inspect alerts after a
/// sweep without configuring any delivery target.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<ProximityAlert>,
}

#[allow(dead_code)]
impl MemorySink {
    /// An empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts recorded so far, in dispatch order.
    #[must_use]
    pub fn records(&self) -> &[ProximityAlert] {
        &self.records
    }
}

impl AlertSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn record(&mut self, alert: &ProximityAlert) -> Result<(), SinkError> {
        self.records.push(alert.clone());
        Ok(())
    }
}

/// Appends alerts to a CSV file, writing the header row only when the
/// file is new or empty.
#[derive(Debug)]
pub struct CsvLogSink {
    path: PathBuf,
}

impl CsvLogSink {
    /// A sink writing to the given path. The file is created on first use.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl AlertSink for CsvLogSink {
    fn name(&self) -> &'static str {
        "csv-log"
    }

    fn record(&mut self, alert: &ProximityAlert) -> Result<(), SinkError> {
        let write_header = match std::fs::metadata(&self.path) {
            Ok(metadata) => metadata.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(alert)?;
        writer.flush()?;
        Ok(())
    }
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// POSTs each alert as JSON to an HTTP endpoint.
#[derive(Debug)]
pub struct WebhookSink {
    client: reqwest::blocking::Client,
    url: String,
}

impl WebhookSink {
    /// A sink posting to the given URL with a 10 second request timeout.
    pub fn new<S: Into<String>>(url: S) -> Result<Self, SinkError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl AlertSink for WebhookSink {
    fn name(&self) -> &'static str {
        "webhook"
    }

    fn record(&mut self, alert: &ProximityAlert) -> Result<(), SinkError> {
        let response = self.client.post(&self.url).json(alert).send()?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(SinkError::HttpStatus(response.status()))
        }
    }
}
