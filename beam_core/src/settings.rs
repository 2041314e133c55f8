//! Solver settings with documented defaults.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default number of diagram samples, endpoints included
pub const DEFAULT_SAMPLE_COUNT: usize = 201;

/// Default relative tolerance for the equilibrium and closure checks
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Tunable solver parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Evenly spaced samples across the span. Must be at least 2.
    pub sample_count: usize,

    /// Relative tolerance used by the self-consistency checks
    pub tolerance: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            sample_count: DEFAULT_SAMPLE_COUNT,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SolverSettings {
    /// Set the sample count and return self (builder pattern)
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the tolerance and return self (builder pattern)
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check sample count and tolerance
    pub fn validate(&self) -> CalcResult<()> {
        validate_sample_count(self.sample_count)?;
        if !(self.tolerance > 0.0) || !self.tolerance.is_finite() {
            return Err(CalcError::invalid_input(
                "settings.tolerance",
                self.tolerance.to_string(),
                "Tolerance must be a positive, finite number",
            ));
        }
        Ok(())
    }
}

/// Both supports must be sampled, so fewer than two points is meaningless
pub fn validate_sample_count(sample_count: usize) -> CalcResult<()> {
    if sample_count < 2 {
        return Err(CalcError::invalid_input(
            "sample_count",
            sample_count.to_string(),
            "At least 2 samples are required (both supports)",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SolverSettings::default();
        assert_eq!(settings.sample_count, 201);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: SolverSettings = serde_json::from_str(r#"{ "sample_count": 11 }"#).unwrap();
        assert_eq!(settings.sample_count, 11);
        assert_eq!(settings.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(SolverSettings::default().with_sample_count(1).validate().is_err());
        assert!(SolverSettings::default().with_tolerance(0.0).validate().is_err());
        assert!(SolverSettings::default().with_sample_count(2).validate().is_ok());
    }
}
