//! Run record data types.

use chrono::{DateTime, Local};
use ids_core::{CoreResult, ensure_score};
use serde::{Deserialize, Serialize};

/// The four performance scores a run produces, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl MetricSet {
    /// Build a metric set, rejecting scores outside the simulated band.
    pub fn new(accuracy: f64, precision: f64, recall: f64, f1_score: f64) -> CoreResult<Self> {
        Ok(Self {
            accuracy: ensure_score(accuracy, "accuracy")?,
            precision: ensure_score(precision, "precision")?,
            recall: ensure_score(recall, "recall")?,
            f1_score: ensure_score(f1_score, "f1_score")?,
        })
    }

    /// Scores in chart category order: accuracy, precision, recall, F1.
    pub fn values(&self) -> [f64; 4] {
        [self.accuracy, self.precision, self.recall, self.f1_score]
    }
}

/// One completed simulated run. Immutable once appended to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// 1-based sequence number; assigned at append time, never reused.
    pub run_number: u32,
    pub model_name: String,
    pub timestamp: DateTime<Local>,
    pub metrics: MetricSet,
}

impl RunRecord {
    /// The label shown in the history list and the chart legend.
    pub fn label(&self) -> String {
        format!("Run {} ({})", self.run_number, self.model_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_set_accepts_band_values() {
        let metrics = MetricSet::new(70.0, 95.0, 82.3, 88.8).unwrap();
        assert_eq!(metrics.values(), [70.0, 95.0, 82.3, 88.8]);
    }

    #[test]
    fn metric_set_rejects_out_of_band() {
        assert!(MetricSet::new(69.9, 80.0, 80.0, 80.0).is_err());
        assert!(MetricSet::new(80.0, 95.1, 80.0, 80.0).is_err());
        assert!(MetricSet::new(80.0, 80.0, f64::NAN, 80.0).is_err());
    }
}
