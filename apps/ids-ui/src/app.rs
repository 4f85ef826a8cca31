use std::path::PathBuf;
use std::time::Duration;

use egui_file_dialog::{DialogMode, FileDialog};

use crate::run_worker::{RunWorker, WorkerMessage};
use crate::views::{ComparisonView, HistoryView, ResultsView, SetupView};
use ids_app::{HistoryState, LabConfig, RunRequest, SelectionState, run_service};
use ids_catalog::ModelKind;
use ids_results::{RunRecord, RunStore};

/// The page controller: owns every piece of session state and hands it to
/// the views by reference each frame.
pub struct IdsBenchApp {
    config: LabConfig,
    store: RunStore,
    selection: SelectionState,
    history: HistoryState,
    dataset_name: String,
    selected_model: Option<ModelKind>,
    selected_parameter: Option<String>,
    file_dialog: FileDialog,
    last_directory: Option<PathBuf>,
    run_worker: Option<RunWorker>,
    validation_message: Option<String>,
    /// The run driving the results summary; set only from completed runs.
    latest_run: Option<RunRecord>,
    setup_view: SetupView,
    results_view: ResultsView,
    history_view: HistoryView,
    comparison_view: ComparisonView,
}

impl IdsBenchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: LabConfig) -> Self {
        Self {
            config,
            store: RunStore::new(),
            selection: SelectionState::default(),
            history: HistoryState::default(),
            dataset_name: String::new(),
            selected_model: None,
            selected_parameter: None,
            file_dialog: FileDialog::new(),
            last_directory: None,
            run_worker: None,
            validation_message: None,
            latest_run: None,
            setup_view: SetupView,
            results_view: ResultsView,
            history_view: HistoryView,
            comparison_view: ComparisonView,
        }
    }

    fn poll_worker(&mut self) {
        let mut completed = None;

        if let Some(worker) = &self.run_worker {
            while let Ok(msg) = worker.progress_rx.try_recv() {
                match msg {
                    WorkerMessage::Complete { model, metrics } => {
                        completed = Some((model, metrics));
                        break;
                    }
                }
            }
        }

        if let Some((model, metrics)) = completed {
            self.run_worker = None;
            let record = self
                .store
                .append(model.label(), chrono::Local::now(), metrics)
                .clone();
            tracing::info!(run = record.run_number, model = model.slug(), "run appended");
            self.selection.note_run(record.run_number);
            self.history.note_run_appended();
            self.latest_run = Some(record);
        }
    }

    fn start_run(&mut self) {
        if self.run_worker.is_some() {
            return;
        }

        let request = RunRequest {
            dataset: self.dataset_name.clone(),
            model: self.selected_model,
            parameter: self.selected_parameter.clone(),
        };

        match run_service::validate_request(&request, &self.config) {
            Ok(model) => {
                self.validation_message = None;
                self.run_worker = Some(RunWorker::start(model));
            }
            Err(e) => {
                let message = match e.validation_message() {
                    Some(msg) => msg.to_string(),
                    None => e.to_string(),
                };
                self.validation_message = Some(message);
            }
        }
    }
}

impl eframe::App for IdsBenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        let busy = self.run_worker.is_some();
        if busy {
            // Keep frames coming while the worker sleeps.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let actions = egui::TopBottomPanel::top("setup")
            .show(ctx, |ui| {
                self.setup_view.show(
                    ui,
                    &mut self.dataset_name,
                    &mut self.selected_model,
                    &mut self.selected_parameter,
                    &self.config,
                    busy,
                    self.validation_message.as_deref(),
                )
            })
            .inner;

        if actions.pick_dataset {
            let initial_dir = self.last_directory.as_ref().and_then(|p| p.to_str());
            let _ = self
                .file_dialog
                .open(DialogMode::SelectFile, true, initial_dir);
        }

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            let path = path.to_path_buf();
            if let Some(parent) = path.parent() {
                self.last_directory = Some(parent.to_path_buf());
            }
            // Only the name travels; the file is never opened.
            if let Some(name) = path.file_name() {
                self.dataset_name = name.to_string_lossy().into_owned();
            }
        }

        if actions.run_requested {
            self.start_run();
        }

        egui::SidePanel::right("history")
            .default_width(320.0)
            .show(ctx, |ui| {
                self.history_view.show(
                    ui,
                    self.store.runs(),
                    &mut self.history,
                    &mut self.selection,
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.results_view.show(ui, self.latest_run.as_ref());
            ui.separator();
            self.comparison_view.show(
                ui,
                &self.store,
                &self.selection,
                self.config.comparison,
            );
        });
    }
}
