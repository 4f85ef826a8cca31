//! Run storage API.

use crate::types::{MetricSet, RunRecord};
use chrono::{DateTime, Local};

/// Append-only, insertion-ordered sequence of completed runs.
///
/// Run numbers are assigned here and are dense: the Nth appended run is
/// always run N, regardless of how views later filter or reorder the list.
#[derive(Debug, Default, Clone)]
pub struct RunStore {
    runs: Vec<RunRecord>,
}

impl RunStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed run and return the stored record.
    pub fn append(
        &mut self,
        model_name: impl Into<String>,
        timestamp: DateTime<Local>,
        metrics: MetricSet,
    ) -> &RunRecord {
        let record = RunRecord {
            run_number: self.runs.len() as u32 + 1,
            model_name: model_name.into(),
            timestamp,
            metrics,
        };
        self.runs.push(record);
        // Just pushed, so the slot exists.
        &self.runs[self.runs.len() - 1]
    }

    /// All runs in insertion order.
    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The most recently appended run, if any.
    pub fn latest(&self) -> Option<&RunRecord> {
        self.runs.last()
    }

    /// Look up a run by its 1-based run number.
    pub fn get(&self, run_number: u32) -> Option<&RunRecord> {
        self.runs.get(run_number.checked_sub(1)? as usize)
    }
}
