//! Summary encoding
//!
//! Renders training summaries as the fixed-format text line, and wraps batches
//! of summaries into a JSON report with producer metadata.

use crate::error::WorkoutError;
use crate::types::TrainingInfo;
use crate::{FLUX_VERSION, PRODUCER_NAME};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Render a summary as the human-readable report line.
///
/// All numeric fields use fixed-point notation with three fractional digits.
pub fn render(info: &TrainingInfo) -> String {
    format!(
        "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
        info.training_type, info.duration, info.distance, info.speed, info.calories
    )
}

impl TrainingInfo {
    /// Human-readable report line, see [`render`]
    pub fn message(&self) -> String {
        render(self)
    }
}

/// Producer metadata attached to JSON reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// JSON report for a batch of summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub summaries: Vec<TrainingInfo>,
}

/// Encoder for text lines and JSON reports
pub struct SummaryEncoder {
    instance_id: String,
}

impl Default for SummaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Render each summary on its own line, with a trailing newline
    pub fn encode_text(&self, summaries: &[TrainingInfo]) -> String {
        let mut out = String::new();
        for info in summaries {
            out.push_str(&render(info));
            out.push('\n');
        }
        out
    }

    /// Wrap summaries into a report stamped with the current time
    pub fn encode_report(&self, summaries: &[TrainingInfo]) -> SummaryReport {
        SummaryReport {
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: FLUX_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            summaries: summaries.to_vec(),
        }
    }

    /// Encode a report to a JSON string
    pub fn encode_to_json(
        &self,
        summaries: &[TrainingInfo],
        pretty: bool,
    ) -> Result<String, WorkoutError> {
        let report = self.encode_report(summaries);
        let encoded = if pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        encoded.map_err(|e| WorkoutError::EncodingError(e.to_string()))
    }
}
