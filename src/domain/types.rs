//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - rendered into terminal reports
//! - embedded in other tools without dragging the CLI along

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// Immutable parameters of a single fit.
///
/// Constructed through [`FitParameters::new`], which rejects malformed values
/// eagerly: the mirror/negate steps of the fit silently produce a wrong table
/// when `steps` is not divisible by 4, so that is a configuration error here
/// rather than a latent numerical bug later.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitParameters {
    freq: f64,
    steps: usize,
    tolerance: f64,
    max_terms: usize,
}

/// Default cap on series terms per fit.
///
/// Factorial growth makes real fits converge in single digits; the cap exists
/// so a pathological tolerance turns into a typed error instead of a spin.
pub const DEFAULT_MAX_TERMS: usize = 32;

impl FitParameters {
    /// Create validated parameters with the default term cap.
    pub fn new(freq: f64, steps: usize, tolerance: f64) -> Result<Self, FitError> {
        if !(freq.is_finite() && freq > 0.0) {
            return Err(FitError::config(format!(
                "Frequency must be finite and > 0 (got {freq})."
            )));
        }
        if steps == 0 || steps % 4 != 0 {
            return Err(FitError::config(format!(
                "Step count must be > 0 and divisible by 4 (got {steps})."
            )));
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(FitError::config(format!(
                "Tolerance must be finite and > 0 (got {tolerance})."
            )));
        }
        Ok(Self {
            freq,
            steps,
            tolerance,
            max_terms: DEFAULT_MAX_TERMS,
        })
    }

    /// Override the term cap (safety bound on the convergence loop).
    pub fn with_max_terms(mut self, max_terms: usize) -> Result<Self, FitError> {
        if max_terms == 0 {
            return Err(FitError::config("Term cap must be >= 1."));
        }
        self.max_terms = max_terms;
        Ok(self)
    }

    pub fn freq(&self) -> f64 {
        self.freq
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    /// Angular frequency `w = 2π·freq`.
    pub fn angular_frequency(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.freq
    }

    /// Period `P = 1/freq`.
    pub fn period(&self) -> f64 {
        1.0 / self.freq
    }
}

/// One fitted value per uniformly spaced sample point over one period.
///
/// Owned by the fitter while fitting; read-only once returned. The length is
/// always exactly `steps`, and the quarter-wave symmetry of sine holds
/// bitwise by construction (the mirror/negate steps copy values, they do not
/// recompute them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTable {
    values: Vec<f64>,
}

impl CoefficientTable {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// Diagnostics for a single convergence attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitAttempt {
    /// Number of series terms used in this attempt (starts at 1).
    pub term_count: usize,
    /// RMS deviation of the attempt's table from the true sine samples.
    pub rms_deviation: f64,
    /// Whether the attempt passed the tolerance check.
    pub accurate: bool,
}

/// Outcome of the accuracy check on a candidate table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accuracy {
    Accurate,
    Inaccurate { rms_deviation: f64 },
}

/// A converged fit: the table plus how we got there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub table: CoefficientTable,
    /// Term count of the converged attempt.
    pub term_count: usize,
    /// RMS deviation of the converged table.
    pub rms_deviation: f64,
    /// Every attempt in order, the converged one last.
    pub attempts: Vec<FitAttempt>,
}

/// Distribution for synthetic demo input vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputDistribution {
    /// Uniform on `[0, 1)` (matches the classic `rand() % 1000 / 1000` demo).
    Uniform,
    /// Normal with mean 0.5 and standard deviation 0.25.
    Normal,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub freq: f64,
    pub steps: usize,
    pub tolerance: f64,
    pub max_terms: usize,

    /// Number of demo prediction trials.
    pub trials: usize,
    /// Length of each synthetic input vector.
    pub input_len: usize,
    /// Seed for synthetic input generation.
    pub seed: u64,
    pub distribution: InputDistribution,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}

impl FitConfig {
    /// Build validated [`FitParameters`] from this config.
    pub fn parameters(&self) -> Result<FitParameters, FitError> {
        FitParameters::new(self.freq, self.steps, self.tolerance)?.with_max_terms(self.max_terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_reject_steps_not_divisible_by_four() {
        assert!(FitParameters::new(50.0, 362, 0.001).is_err());
        assert!(FitParameters::new(50.0, 0, 0.001).is_err());
        assert!(FitParameters::new(50.0, 360, 0.001).is_ok());
    }

    #[test]
    fn parameters_reject_bad_freq_and_tolerance() {
        assert!(FitParameters::new(0.0, 360, 0.001).is_err());
        assert!(FitParameters::new(-50.0, 360, 0.001).is_err());
        assert!(FitParameters::new(f64::NAN, 360, 0.001).is_err());
        assert!(FitParameters::new(50.0, 360, 0.0).is_err());
        assert!(FitParameters::new(50.0, 360, f64::INFINITY).is_err());
    }

    #[test]
    fn parameters_reject_zero_term_cap() {
        let params = FitParameters::new(50.0, 360, 0.001).unwrap();
        assert!(params.with_max_terms(0).is_err());
        assert_eq!(params.with_max_terms(8).unwrap().max_terms(), 8);
    }

    #[test]
    fn derived_quantities() {
        let params = FitParameters::new(50.0, 360, 0.001).unwrap();
        assert!((params.angular_frequency() - 100.0 * std::f64::consts::PI).abs() < 1e-12);
        assert!((params.period() - 0.02).abs() < 1e-15);
        assert_eq!(params.max_terms(), DEFAULT_MAX_TERMS);
    }

    #[test]
    fn table_accessors() {
        let table = CoefficientTable::new(vec![0.0, 0.5, 1.0]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.get(1), Some(0.5));
        assert_eq!(table.get(3), None);
        assert_eq!(table.as_slice(), &[0.0, 0.5, 1.0]);
    }
}
