//! Shared application service layer for idsbench.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing run validation and synthesis, history presentation logic,
//! comparison chart assembly, and workbench configuration.

pub mod comparison;
pub mod config;
pub mod error;
pub mod history;
pub mod run_service;

// Re-export key types for convenience
pub use comparison::{
    ChartSeries, ComparisonChart, METRIC_LABELS, SERIES_PALETTE, SeriesColor, build_chart,
    selected_runs,
};
pub use config::{ComparisonMode, LabConfig};
pub use error::{AppError, AppResult};
pub use history::{
    HistoryState, SelectionState, SortOrder, export_history_json, filter_by_date,
    format_run_date, format_run_timestamp, sort_by_timestamp,
};
pub use run_service::{
    RunRequest, SIMULATED_RUN_DELAY, execute_run, synthesize_metrics, validate_request,
};
