use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The detection models the workbench can "run".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    TreeBased,
    Lccde,
    MthIds,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::TreeBased, ModelKind::Lccde, ModelKind::MthIds];

    /// Display label shown in selectors and run history.
    pub fn label(self) -> &'static str {
        match self {
            ModelKind::TreeBased => "Tree-based",
            ModelKind::Lccde => "LCCDE",
            ModelKind::MthIds => "MTH-IDS",
        }
    }

    /// Stable machine-facing identifier.
    pub fn slug(self) -> &'static str {
        match self {
            ModelKind::TreeBased => "tree-based",
            ModelKind::Lccde => "lccde",
            ModelKind::MthIds => "mth-ids",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown model: {input}")]
pub struct ModelParseError {
    pub input: String,
}

impl FromStr for ModelKind {
    type Err = ModelParseError;

    /// Accepts either the slug or the display label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ModelKind::ALL
            .into_iter()
            .find(|m| m.slug() == needle || m.label().to_lowercase() == needle)
            .ok_or_else(|| ModelParseError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for model in ModelKind::ALL {
            assert_eq!(model.slug().parse::<ModelKind>().unwrap(), model);
        }
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("lccde".parse::<ModelKind>().unwrap(), ModelKind::Lccde);
        assert_eq!("Tree-Based".parse::<ModelKind>().unwrap(), ModelKind::TreeBased);
        assert_eq!("MTH-IDS".parse::<ModelKind>().unwrap(), ModelKind::MthIds);
    }

    #[test]
    fn unknown_model_is_rejected() {
        assert!("svm".parse::<ModelKind>().is_err());
    }
}
