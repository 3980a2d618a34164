//! Accuracy check for candidate coefficient tables.
//!
//! The convergence metric is the root-mean-square deviation between the
//! candidate table and the true sine sampled at the same points:
//!
//! ```text
//! rms = sqrt( Σ_i (table[i] - sin(w·P·i/steps))² / (steps - 1) )
//! ```
//!
//! The denominator is `(steps - 1)`, the sample-variance convention. Both
//! functions here are pure: no mutation, deterministic for deterministic
//! input.

use crate::domain::{Accuracy, FitParameters};

/// RMS deviation of `values` from the discretized true sine.
///
/// `values` is expected to have length `params.steps()`; extra entries are
/// ignored and missing entries are not invented (the fitter always passes a
/// full-length table).
pub fn rms_deviation(values: &[f64], params: &FitParameters) -> f64 {
    let steps = params.steps();
    let w = params.angular_frequency();
    let period = params.period();

    let mut diff_sum = 0.0;
    for (i, &value) in values.iter().enumerate().take(steps) {
        let time = period * i as f64 / steps as f64;
        let true_value = (w * time).sin();
        let diff = value - true_value;
        diff_sum += diff * diff;
    }

    (diff_sum / (steps as f64 - 1.0)).sqrt()
}

/// Classify a candidate table as accurate or inaccurate against the tolerance.
pub fn error_analysis(values: &[f64], params: &FitParameters) -> Accuracy {
    let rms = rms_deviation(values, params);
    if rms > params.tolerance() {
        Accuracy::Inaccurate { rms_deviation: rms }
    } else {
        Accuracy::Accurate
    }
}
