use crate::CoreError;

/// Lower bound of the simulated score band, in percent.
pub const SCORE_MIN: f64 = 70.0;
/// Upper bound of the simulated score band, in percent.
pub const SCORE_MAX: f64 = 95.0;

/// Round a score to one decimal place.
pub fn round_score(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A score is valid when it is finite and inside [SCORE_MIN, SCORE_MAX].
pub fn is_valid_score(value: f64) -> bool {
    value.is_finite() && (SCORE_MIN..=SCORE_MAX).contains(&value)
}

/// True when the value carries at most one decimal digit.
pub fn has_single_decimal(value: f64) -> bool {
    (round_score(value) - value).abs() < 1e-9
}

pub fn ensure_score(value: f64, what: &'static str) -> Result<f64, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::NonFinite { what, value });
    }
    if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
        return Err(CoreError::ScoreOutOfBand { what, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_keeps_one_decimal() {
        assert_eq!(round_score(83.14), 83.1);
        assert_eq!(round_score(83.15), 83.2);
        assert_eq!(round_score(70.0), 70.0);
    }

    #[test]
    fn band_edges_are_valid() {
        assert!(is_valid_score(SCORE_MIN));
        assert!(is_valid_score(SCORE_MAX));
        assert!(!is_valid_score(69.9));
        assert!(!is_valid_score(95.1));
        assert!(!is_valid_score(f64::NAN));
    }

    #[test]
    fn ensure_score_rejects_nan() {
        let err = ensure_score(f64::NAN, "accuracy").unwrap_err();
        assert!(format!("{err}").contains("Non-finite"));
    }

    #[test]
    fn ensure_score_rejects_out_of_band() {
        let err = ensure_score(12.0, "recall").unwrap_err();
        assert!(format!("{err}").contains("out of band"));
    }
}
