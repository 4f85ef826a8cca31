use ids_app::LabConfig;
use ids_catalog::{ModelKind, parameter_options};

/// What the setup row asked the app to do this frame.
#[derive(Default)]
pub struct SetupActions {
    pub pick_dataset: bool,
    pub run_requested: bool,
}

#[derive(Default)]
pub struct SetupView;

impl SetupView {
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        dataset_name: &mut String,
        selected_model: &mut Option<ModelKind>,
        selected_parameter: &mut Option<String>,
        config: &LabConfig,
        busy: bool,
        validation_message: Option<&str>,
    ) -> SetupActions {
        let mut actions = SetupActions::default();

        ui.horizontal(|ui| {
            ui.label("Dataset:");
            ui.add(
                egui::TextEdit::singleline(dataset_name)
                    .hint_text("Select Dataset")
                    .desired_width(180.0),
            );
            if ui.button("Upload").clicked() {
                actions.pick_dataset = true;
            }

            ui.separator();

            ui.label("Model:");
            let model_before = *selected_model;
            egui::ComboBox::from_id_salt("model_select")
                .selected_text(
                    selected_model
                        .map(|m| m.label())
                        .unwrap_or("no model chosen"),
                )
                .show_ui(ui, |ui| {
                    for model in ModelKind::ALL {
                        ui.selectable_value(selected_model, Some(model), model.label());
                    }
                });
            if *selected_model != model_before {
                // Presets are model-specific.
                *selected_parameter = None;
            }

            if config.parameters_control {
                ui.label("Parameters:");
                match *selected_model {
                    Some(model) => {
                        let selected_text = selected_parameter
                            .as_deref()
                            .and_then(|value| {
                                parameter_options(model)
                                    .iter()
                                    .find(|p| p.value == value)
                                    .map(|p| p.label)
                            })
                            .unwrap_or("no parameters chosen");
                        egui::ComboBox::from_id_salt("param_select")
                            .selected_text(selected_text)
                            .show_ui(ui, |ui| {
                                for preset in parameter_options(model) {
                                    ui.selectable_value(
                                        selected_parameter,
                                        Some(preset.value.to_string()),
                                        preset.label,
                                    );
                                }
                            });
                    }
                    None => {
                        ui.add_enabled_ui(false, |ui| {
                            egui::ComboBox::from_id_salt("param_select")
                                .selected_text("no parameters chosen")
                                .show_ui(ui, |_ui| {});
                        });
                    }
                }
            }

            ui.separator();

            ui.add_enabled_ui(!busy, |ui| {
                let text = if busy { "Running..." } else { "Run Experiment" };
                if ui.button(text).clicked() {
                    actions.run_requested = true;
                }
            });
        });

        if let Some(message) = validation_message {
            ui.colored_label(egui::Color32::RED, message);
        }

        actions
    }
}
