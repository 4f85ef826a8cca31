//! History presentation logic: timestamp formatting, date filtering,
//! toggleable sorting, and per-run selection state.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use ids_results::RunRecord;

/// Date part of a history row, `MM/DD/YYYY`. This is also the text the
/// search box matches against.
pub fn format_run_date(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%m/%d/%Y").to_string()
}

/// Full history row timestamp, `MM/DD/YYYY, h:mm AM/PM`.
pub fn format_run_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%m/%d/%Y, %-I:%M %p").to_string()
}

/// Runs whose formatted date contains the trimmed query as a substring,
/// case-insensitively. An empty query keeps every run, in store order.
pub fn filter_by_date<'a>(runs: &'a [RunRecord], query: &str) -> Vec<&'a RunRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return runs.iter().collect();
    }
    runs.iter()
        .filter(|run| format_run_date(&run.timestamp).to_lowercase().contains(&needle))
        .collect()
}

/// History as pretty-printed JSON, for scripting against the CLI.
pub fn export_history_json(runs: &[RunRecord]) -> crate::AppResult<String> {
    Ok(serde_json::to_string_pretty(runs)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Order rows by timestamp.
pub fn sort_by_timestamp(rows: &mut [&RunRecord], order: SortOrder) {
    rows.sort_by_key(|run| run.timestamp);
    if order == SortOrder::Descending {
        rows.reverse();
    }
}

/// Search query and sort state of the history list.
///
/// The remembered direction flips on every activation of the sort control
/// and survives appends; the *applied* order is cleared when a run is
/// appended, so the list falls back to store order until sorted again.
#[derive(Debug, Clone)]
pub struct HistoryState {
    pub query: String,
    direction: SortOrder,
    applied: Option<SortOrder>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            query: String::new(),
            direction: SortOrder::Ascending,
            applied: None,
        }
    }
}

impl HistoryState {
    /// React to the sort control: flip the remembered direction and apply
    /// it to the display. Two activations in a row therefore restore the
    /// order the list had before the first one.
    pub fn activate_sort(&mut self) {
        self.direction = self.direction.flipped();
        self.applied = Some(self.direction);
    }

    /// A freshly appended run resets the display to store order.
    pub fn note_run_appended(&mut self) {
        self.applied = None;
    }

    pub fn applied_sort(&self) -> Option<SortOrder> {
        self.applied
    }

    /// The rows currently on screen: filtered, then sorted if a sort is
    /// applied.
    pub fn visible_rows<'a>(&self, runs: &'a [RunRecord]) -> Vec<&'a RunRecord> {
        let mut rows = filter_by_date(runs, &self.query);
        if let Some(order) = self.applied {
            sort_by_timestamp(&mut rows, order);
        }
        rows
    }
}

/// Which runs are checked in the history list.
///
/// Kept apart from the run records: checked state is view state, and it must
/// survive rows disappearing into and returning from a search filter.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    checked: BTreeMap<u32, bool>,
}

impl SelectionState {
    /// Register a newly appended run; new runs start checked.
    pub fn note_run(&mut self, run_number: u32) {
        self.checked.insert(run_number, true);
    }

    pub fn set_checked(&mut self, run_number: u32, checked: bool) {
        self.checked.insert(run_number, checked);
    }

    pub fn is_checked(&self, run_number: u32) -> bool {
        self.checked.get(&run_number).copied().unwrap_or(false)
    }

    /// Checked run numbers in ascending order.
    pub fn checked_runs(&self) -> Vec<u32> {
        self.checked
            .iter()
            .filter(|(_, &checked)| checked)
            .map(|(&run_number, _)| run_number)
            .collect()
    }
}
