//! Run validation and synthesis.
//!
//! There is no real training or inference behind the run button: a run is a
//! fixed delay followed by four uniformly drawn scores. Validation happens
//! synchronously before the delay starts; a rejected request never touches
//! the run store.

use std::time::Duration;

use chrono::Local;
use ids_catalog::{ModelKind, parameter_options};
use ids_core::{SCORE_MAX, SCORE_MIN, round_score};
use ids_results::{MetricSet, RunRecord, RunStore};
use rand::Rng;

use crate::config::LabConfig;
use crate::error::{AppError, AppResult};

/// Fixed delay between trigger and completion, standing in for the absent
/// backend.
pub const SIMULATED_RUN_DELAY: Duration = Duration::from_secs(2);

/// What the user configured before pressing the run control.
///
/// `model` and `parameter` are `None` while the corresponding selector still
/// shows its placeholder.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// File name captured from the dataset picker; contents are never read.
    pub dataset: String,
    pub model: Option<ModelKind>,
    /// Value slug of the chosen parameter preset.
    pub parameter: Option<String>,
}

/// Check the preconditions for a run and return the chosen model.
pub fn validate_request(request: &RunRequest, config: &LabConfig) -> AppResult<ModelKind> {
    if request.dataset.trim().is_empty() {
        return Err(AppError::Validation("Please select a dataset".to_string()));
    }

    let model = request
        .model
        .ok_or_else(|| AppError::Validation("Please select a model".to_string()))?;

    if config.parameters_control {
        match request.parameter.as_deref() {
            None => {
                return Err(AppError::Validation(
                    "Please select model parameters".to_string(),
                ));
            }
            Some(value) => {
                if !parameter_options(model).iter().any(|p| p.value == value) {
                    return Err(AppError::Validation(format!(
                        "Parameters '{value}' are not valid for {model}"
                    )));
                }
            }
        }
    }

    Ok(model)
}

/// Draw the four scores independently and uniformly from the band, rounded
/// to one decimal.
pub fn synthesize_metrics<R: Rng + ?Sized>(rng: &mut R) -> MetricSet {
    let mut draw = || round_score(rng.random_range(SCORE_MIN..=SCORE_MAX));
    MetricSet {
        accuracy: draw(),
        precision: draw(),
        recall: draw(),
        f1_score: draw(),
    }
}

/// Validate, synthesize, and append a run.
///
/// The simulated delay is not part of this function; frontends own the busy
/// window (worker thread in the GUI, spinner in the CLI) and call this when
/// it elapses.
pub fn execute_run(
    store: &mut RunStore,
    request: &RunRequest,
    config: &LabConfig,
) -> AppResult<RunRecord> {
    let model = validate_request(request, config)?;
    let metrics = synthesize_metrics(&mut rand::rng());
    let record = store.append(model.label(), Local::now(), metrics).clone();
    tracing::info!(
        run = record.run_number,
        model = model.slug(),
        dataset = %request.dataset,
        "simulated run completed"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ids_core::{has_single_decimal, is_valid_score};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    proptest! {
        #[test]
        fn synthesized_scores_stay_in_band(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let metrics = synthesize_metrics(&mut rng);
            for value in metrics.values() {
                prop_assert!(is_valid_score(value));
                prop_assert!(has_single_decimal(value));
            }
        }
    }

    #[test]
    fn parameter_slug_must_belong_to_the_model() {
        let config = LabConfig::default();
        let request = RunRequest {
            dataset: "traffic.csv".to_string(),
            model: Some(ModelKind::Lccde),
            // A Tree-based preset, invalid for LCCDE.
            parameter: Some("max-depth-5".to_string()),
        };
        assert!(validate_request(&request, &config).is_err());
    }
}
