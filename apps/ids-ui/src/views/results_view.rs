use ids_app::METRIC_LABELS;
use ids_results::RunRecord;

/// Text summary of the most recently completed run. The record is handed in
/// by the app; nothing here reads selector state.
#[derive(Default)]
pub struct ResultsView;

impl ResultsView {
    pub fn show(&mut self, ui: &mut egui::Ui, latest: Option<&RunRecord>) {
        ui.heading("Results");

        let Some(run) = latest else {
            ui.label("Run an experiment to see results");
            return;
        };

        ui.label(format!("Model: {}", run.model_name));
        ui.horizontal(|ui| {
            for (label, value) in METRIC_LABELS.iter().zip(run.metrics.values()) {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        ui.label(*label);
                        ui.strong(format!("{value:.1}%"));
                    });
                });
            }
        });
    }
}
