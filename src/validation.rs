//! Input validation for rotation configurations.
//!
//! The engine itself accepts any configuration and degrades gracefully;
//! these checks are for callers that want to reject implausible input
//! before running it. Detects:
//! - Zero-length work or rest periods
//! - A zero drilling target
//! - Induction that leaves no drilling day in a first cycle
//! - Horizons too long to be a meaningful plan

use thiserror::Error;

use crate::models::Configuration;

/// Longest horizon accepted, in days (about a century).
pub const MAX_HORIZON_DAYS: usize = 36_500;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    ZeroWorkDays,
    ZeroRestDays,
    ZeroDrillingTarget,
    /// `induction_days + 1 >= work_days`.
    InductionExceedsWork,
    /// Horizon above [`MAX_HORIZON_DAYS`].
    HorizonTooLong,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a configuration.
///
/// Checks:
/// 1. `work_days >= 1`
/// 2. `rest_days >= 1`
/// 3. `total_drilling_days >= 1`
/// 4. A first cycle has at least one drilling day after UP and induction
/// 5. The horizon stays within [`MAX_HORIZON_DAYS`]
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &Configuration) -> ValidationResult {
    let mut errors = Vec::new();
    let regime = config.regime;

    if regime.work_days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroWorkDays,
            "work_days must be at least 1",
        ));
    }

    if regime.rest_days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroRestDays,
            "rest_days must be at least 1",
        ));
    }

    if config.total_drilling_days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroDrillingTarget,
            "total_drilling_days must be at least 1",
        ));
    }

    if regime.work_days > 0 && config.induction_days + 1 >= regime.work_days {
        errors.push(ValidationError::new(
            ValidationErrorKind::InductionExceedsWork,
            format!(
                "induction_days ({}) leaves no drilling day in a {}-day work period",
                config.induction_days, regime.work_days
            ),
        ));
    }

    let horizon = config.horizon_days();
    if horizon > MAX_HORIZON_DAYS {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonTooLong,
            format!("horizon of {horizon} days exceeds the {MAX_HORIZON_DAYS}-day limit"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Regime;

    fn kinds(config: &Configuration) -> Vec<ValidationErrorKind> {
        validate_config(config)
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_standard_regimes() {
        for (w, r, i, t) in [(14, 7, 5, 30), (14, 7, 5, 90), (7, 7, 1, 30), (7, 7, 1, 90)] {
            let c = Configuration::new(Regime::new(w, r), i, t);
            assert!(validate_config(&c).is_ok(), "{w}/{r} induction {i}");
        }
    }

    #[test]
    fn test_zero_work_and_rest() {
        let c = Configuration::new(Regime::new(0, 0), 0, 30);
        let k = kinds(&c);
        assert!(k.contains(&ValidationErrorKind::ZeroWorkDays));
        assert!(k.contains(&ValidationErrorKind::ZeroRestDays));
        assert!(!k.contains(&ValidationErrorKind::InductionExceedsWork));
    }

    #[test]
    fn test_zero_target() {
        let c = Configuration::new(Regime::new(14, 7), 5, 0);
        assert_eq!(kinds(&c), vec![ValidationErrorKind::ZeroDrillingTarget]);
    }

    #[test]
    fn test_induction_exceeds_work() {
        let c = Configuration::new(Regime::new(7, 7), 6, 30);
        assert_eq!(kinds(&c), vec![ValidationErrorKind::InductionExceedsWork]);
        let ok = Configuration::new(Regime::new(7, 7), 5, 30);
        assert!(validate_config(&ok).is_ok());
    }

    #[test]
    fn test_horizon_too_long() {
        let c = Configuration::new(Regime::new(14, 7), 5, 100_000);
        assert_eq!(kinds(&c), vec![ValidationErrorKind::HorizonTooLong]);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let c = Configuration::new(Regime::new(1, 0), 3, 0);
        let errors = validate_config(&c).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].to_string().contains("rest_days"));
    }
}
