use crate::ModelKind;

/// One selectable parameter preset for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamOption {
    /// Stable identifier captured in run requests.
    pub value: &'static str,
    /// Text shown in the selector.
    pub label: &'static str,
}

const TREE_BASED_PARAMS: [ParamOption; 10] = [
    ParamOption { value: "max-depth-5", label: "Max Depth: 5" },
    ParamOption { value: "max-depth-10", label: "Max Depth: 10" },
    ParamOption { value: "max-depth-15", label: "Max Depth: 15" },
    ParamOption { value: "min-samples-3", label: "Min Samples: 3" },
    ParamOption { value: "min-samples-5", label: "Min Samples: 5" },
    ParamOption { value: "min-samples-7", label: "Min Samples: 7" },
    ParamOption { value: "n-estimators-50", label: "N Estimators: 50" },
    ParamOption { value: "n-estimators-100", label: "N Estimators: 100" },
    ParamOption { value: "criterion-gini", label: "Criterion: Gini" },
    ParamOption { value: "criterion-entropy", label: "Criterion: Entropy" },
];

const LCCDE_PARAMS: [ParamOption; 10] = [
    ParamOption { value: "num-clusters-3", label: "Number of Clusters: 3" },
    ParamOption { value: "num-clusters-5", label: "Number of Clusters: 5" },
    ParamOption { value: "num-clusters-7", label: "Number of Clusters: 7" },
    ParamOption { value: "threshold-0.5", label: "Detection Threshold: 0.5" },
    ParamOption { value: "threshold-0.7", label: "Detection Threshold: 0.7" },
    ParamOption { value: "threshold-0.9", label: "Detection Threshold: 0.9" },
    ParamOption { value: "distance-euclidean", label: "Distance Metric: Euclidean" },
    ParamOption { value: "distance-manhattan", label: "Distance Metric: Manhattan" },
    ParamOption { value: "init-kmeans++", label: "Initialization: K-means++" },
    ParamOption { value: "init-random", label: "Initialization: Random" },
];

const MTH_IDS_PARAMS: [ParamOption; 10] = [
    ParamOption { value: "threshold-0.6", label: "Threshold: 0.6" },
    ParamOption { value: "threshold-0.8", label: "Threshold: 0.8" },
    ParamOption { value: "threshold-0.9", label: "Threshold: 0.9" },
    ParamOption { value: "window-50", label: "Window Size: 50" },
    ParamOption { value: "window-100", label: "Window Size: 100" },
    ParamOption { value: "window-150", label: "Window Size: 150" },
    ParamOption { value: "history-size-1000", label: "History Size: 1000" },
    ParamOption { value: "history-size-5000", label: "History Size: 5000" },
    ParamOption { value: "mode-adaptive", label: "Mode: Adaptive" },
    ParamOption { value: "mode-static", label: "Mode: Static" },
];

/// Parameter presets offered for a model. The tables are model-specific, so
/// a model change invalidates any previously chosen preset.
pub fn parameter_options(model: ModelKind) -> &'static [ParamOption] {
    match model {
        ModelKind::TreeBased => &TREE_BASED_PARAMS,
        ModelKind::Lccde => &LCCDE_PARAMS,
        ModelKind::MthIds => &MTH_IDS_PARAMS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_model_has_ten_presets() {
        for model in ModelKind::ALL {
            assert_eq!(parameter_options(model).len(), 10, "{model}");
        }
    }

    #[test]
    fn preset_values_are_unique_per_model() {
        for model in ModelKind::ALL {
            let values: HashSet<_> = parameter_options(model).iter().map(|p| p.value).collect();
            assert_eq!(values.len(), parameter_options(model).len(), "{model}");
        }
    }

    #[test]
    fn preset_tables_differ_between_models() {
        let tree: Vec<_> = parameter_options(ModelKind::TreeBased)
            .iter()
            .map(|p| p.value)
            .collect();
        let lccde: Vec<_> = parameter_options(ModelKind::Lccde)
            .iter()
            .map(|p| p.value)
            .collect();
        assert_ne!(tree, lccde);
    }
}
