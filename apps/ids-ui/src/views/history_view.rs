use egui_extras::{Column, TableBuilder};
use ids_app::{HistoryState, SelectionState, format_run_timestamp};
use ids_results::RunRecord;

#[derive(Default)]
pub struct HistoryView;

impl HistoryView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        runs: &[RunRecord],
        history: &mut HistoryState,
        selection: &mut SelectionState,
    ) {
        ui.heading("Experiment History");

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(
                egui::TextEdit::singleline(&mut history.query)
                    .hint_text("MM/DD/YYYY")
                    .desired_width(120.0),
            );
            if ui.button("Sort by Date").clicked() {
                history.activate_sort();
            }
        });

        ui.separator();

        if runs.is_empty() {
            ui.label("No runs yet");
            return;
        }

        let rows = history.visible_rows(runs);
        if rows.is_empty() {
            ui.label("No runs match those dates");
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::auto())
            .header(18.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Run");
                });
                header.col(|ui| {
                    ui.strong("Date");
                });
            })
            .body(|mut body| {
                for run in rows {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            let mut checked = selection.is_checked(run.run_number);
                            if ui.checkbox(&mut checked, run.label()).changed() {
                                selection.set_checked(run.run_number, checked);
                            }
                        });
                        row.col(|ui| {
                            ui.label(format_run_timestamp(&run.timestamp));
                        });
                    });
                }
            });
    }
}
