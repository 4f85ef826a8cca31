use egui_plot::{Bar, BarChart, Legend, Plot};
use ids_app::{ComparisonMode, METRIC_LABELS, SelectionState, build_chart, selected_runs};
use ids_results::RunStore;

/// Grouped bar chart of the charted runs, four bars per series. At most one
/// plot is constructed per frame, and an empty selection constructs none.
#[derive(Default)]
pub struct ComparisonView;

impl ComparisonView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        store: &RunStore,
        selection: &SelectionState,
        mode: ComparisonMode,
    ) {
        ui.heading("Performance Comparison");

        let selected = selected_runs(store, selection, mode);
        let Some(chart) = build_chart(&selected) else {
            ui.label("No runs selected");
            return;
        };

        // Bars of one category sit side by side, with a one-slot gap
        // between categories.
        let group_span = chart.series.len() + 1;

        let mut plot = Plot::new("performance_comparison")
            .x_axis_label("Metrics")
            .y_axis_label("Percentage")
            .include_y(0.0)
            .include_y(100.0)
            .show_axes([false, true])
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false);
        if chart.show_legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for (series_index, series) in chart.series.iter().enumerate() {
                let color =
                    egui::Color32::from_rgb(series.color.r, series.color.g, series.color.b);
                let bars: Vec<Bar> = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(metric_index, &value)| {
                        Bar::new((metric_index * group_span + series_index) as f64, value)
                            .width(0.9)
                            .name(METRIC_LABELS[metric_index])
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).color(color).name(&series.label));
            }
        });
    }
}
