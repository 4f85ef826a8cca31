//! End-to-end run execution through the service layer.

use ids_app::{AppError, ComparisonMode, LabConfig, RunRequest, execute_run, validate_request};
use ids_catalog::ModelKind;
use ids_core::{has_single_decimal, is_valid_score};
use ids_results::RunStore;

fn valid_request() -> RunRequest {
    RunRequest {
        dataset: "cicids2017.csv".to_string(),
        model: Some(ModelKind::Lccde),
        parameter: Some("num-clusters-5".to_string()),
    }
}

#[test]
fn empty_dataset_is_rejected_and_store_untouched() {
    let config = LabConfig::default();
    let mut store = RunStore::new();
    let request = RunRequest {
        dataset: "   ".to_string(),
        ..valid_request()
    };

    let err = execute_run(&mut store, &request, &config).unwrap_err();
    assert_eq!(err.validation_message(), Some("Please select a dataset"));
    assert!(store.is_empty());
}

#[test]
fn missing_model_is_rejected() {
    let config = LabConfig::default();
    let request = RunRequest {
        model: None,
        ..valid_request()
    };

    let err = validate_request(&request, &config).unwrap_err();
    assert_eq!(err.validation_message(), Some("Please select a model"));
}

#[test]
fn missing_parameters_rejected_only_when_control_is_enabled() {
    let request = RunRequest {
        parameter: None,
        ..valid_request()
    };

    let with_control = LabConfig::default();
    assert!(validate_request(&request, &with_control).is_err());

    let without_control = LabConfig {
        parameters_control: false,
        comparison: ComparisonMode::MultiSelect,
    };
    assert_eq!(
        validate_request(&request, &without_control).unwrap(),
        ModelKind::Lccde
    );
}

#[test]
fn executed_runs_get_sequential_numbers_and_banded_scores() {
    let config = LabConfig::default();
    let mut store = RunStore::new();
    let request = valid_request();

    for expected in 1..=3u32 {
        let record = execute_run(&mut store, &request, &config).unwrap();
        assert_eq!(record.run_number, expected);
        assert_eq!(record.model_name, "LCCDE");
        for value in record.metrics.values() {
            assert!(is_valid_score(value), "{value}");
            assert!(has_single_decimal(value), "{value}");
        }
    }
    assert_eq!(store.len(), 3);
}

#[test]
fn validation_errors_carry_a_displayable_message() {
    let config = LabConfig::default();
    let request = RunRequest {
        dataset: String::new(),
        model: None,
        parameter: None,
    };

    match validate_request(&request, &config) {
        Err(AppError::Validation(msg)) => assert_eq!(msg, "Please select a dataset"),
        other => panic!("expected validation error, got {other:?}"),
    }
}
