//! Comparison chart assembly.
//!
//! Produces a frontend-agnostic description of the grouped bar chart: one
//! series per charted run, four values per series. The frontends only map
//! this onto their rendering sink.

use ids_results::{RunRecord, RunStore};

use crate::config::ComparisonMode;
use crate::history::SelectionState;

/// Chart categories, in display order. Matches `MetricSet::values`.
pub const METRIC_LABELS: [&str; 4] = ["Accuracy", "Precision", "Recall", "F1 Score"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Series colors, assigned cyclically in run order and reused once the
/// selection exceeds six runs.
pub const SERIES_PALETTE: [SeriesColor; 6] = [
    SeriesColor { r: 239, g: 68, b: 68 },   // red
    SeriesColor { r: 59, g: 130, b: 246 },  // blue
    SeriesColor { r: 245, g: 158, b: 11 },  // orange
    SeriesColor { r: 34, g: 197, b: 94 },   // green
    SeriesColor { r: 168, g: 85, b: 247 },  // purple
    SeriesColor { r: 20, g: 184, b: 166 },  // teal
];

#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub run_number: u32,
    pub label: String,
    pub color: SeriesColor,
    /// One value per entry of [`METRIC_LABELS`].
    pub values: [f64; 4],
}

#[derive(Debug, Clone)]
pub struct ComparisonChart {
    pub series: Vec<ChartSeries>,
    /// Shown only when more than one run is charted.
    pub show_legend: bool,
}

/// The runs feeding the chart under the configured strategy.
pub fn selected_runs<'a>(
    store: &'a RunStore,
    selection: &SelectionState,
    mode: ComparisonMode,
) -> Vec<&'a RunRecord> {
    match mode {
        ComparisonMode::LatestOnly => store.latest().into_iter().collect(),
        ComparisonMode::MultiSelect => store
            .runs()
            .iter()
            .filter(|run| selection.is_checked(run.run_number))
            .collect(),
    }
}

/// Assemble the chart description. An empty selection renders no chart at
/// all, so this returns `None` rather than an empty chart.
pub fn build_chart(selected: &[&RunRecord]) -> Option<ComparisonChart> {
    if selected.is_empty() {
        return None;
    }

    let series = selected
        .iter()
        .enumerate()
        .map(|(index, run)| ChartSeries {
            run_number: run.run_number,
            label: run.label(),
            color: SERIES_PALETTE[index % SERIES_PALETTE.len()],
            values: run.metrics.values(),
        })
        .collect();

    Some(ComparisonChart {
        series,
        show_legend: selected.len() > 1,
    })
}
