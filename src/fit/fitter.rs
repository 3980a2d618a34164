//! The adaptive series-fitting loop.
//!
//! Given validated [`FitParameters`], the fitter:
//!
//! - evaluates the truncated Taylor series over the first quarter period
//! - mirrors the quarter into the second quarter
//! - negates the first half into the second half
//! - checks RMS accuracy and, on failure, retries with one more term
//!
//! The retry loop is bounded by `max_terms`; exhausting it yields a typed
//! [`FitError::NonConvergence`] rather than a partial table. Each attempt is
//! reported to a [`DiagnosticsSink`] so callers can log convergence progress
//! without the fitter knowing how it is rendered.
//!
//! Quarter-wave symmetry is exact by construction: the mirror and negate
//! steps copy already-computed values instead of re-evaluating the series,
//! so the invariants hold bitwise on every attempt.

use crate::domain::{CoefficientTable, FitAttempt, FitParameters, FitReport};
use crate::error::FitError;
use crate::fit::accuracy::rms_deviation;
use crate::math::sine_taylor;

/// Receiver for per-attempt convergence diagnostics.
///
/// Implemented by external collaborators (e.g., the console reporter); the
/// fitter only pushes [`FitAttempt`] records through it.
pub trait DiagnosticsSink {
    fn on_attempt(&mut self, attempt: &FitAttempt);
}

/// Sink that discards all diagnostics.
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn on_attempt(&mut self, _attempt: &FitAttempt) {}
}

/// Fits one period of a sine wave with a growing Taylor expansion.
///
/// The fitter is stateless across calls: each `fit()` runs the whole
/// convergence loop from `term_count = 1` and returns a fresh table.
/// Calling it again re-fits from scratch. Concurrent use from multiple
/// threads is not supported (and not needed: fits are cheap and the table
/// is immutable once returned).
#[derive(Debug, Clone)]
pub struct SeriesFitter {
    params: FitParameters,
}

impl SeriesFitter {
    pub fn new(params: FitParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FitParameters {
        &self.params
    }

    /// Run the convergence loop, discarding per-attempt diagnostics.
    pub fn fit(&self) -> Result<FitReport, FitError> {
        self.fit_with_diagnostics(&mut NullSink)
    }

    /// Run the convergence loop, reporting each attempt to `sink`.
    pub fn fit_with_diagnostics(
        &self,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<FitReport, FitError> {
        let steps = self.params.steps();
        let mut attempts = Vec::new();
        let mut last_rms = f64::INFINITY;

        for term_count in 1..=self.params.max_terms() {
            let values = self.build_table(term_count);

            // Same inclusive-boundary comparison as `error_analysis`; we keep
            // the raw RMS around for diagnostics either way.
            let rms = rms_deviation(&values, &self.params);
            let accurate = rms <= self.params.tolerance();

            let attempt = FitAttempt {
                term_count,
                rms_deviation: rms,
                accurate,
            };
            sink.on_attempt(&attempt);
            attempts.push(attempt);
            last_rms = rms;

            if accurate {
                debug_assert_eq!(values.len(), steps);
                return Ok(FitReport {
                    table: CoefficientTable::new(values),
                    term_count,
                    rms_deviation: rms,
                    attempts,
                });
            }
        }

        Err(FitError::NonConvergence {
            max_terms: self.params.max_terms(),
            rms_deviation: last_rms,
        })
    }

    /// Build one candidate table for the given term count.
    fn build_table(&self, term_count: usize) -> Vec<f64> {
        let steps = self.params.steps();
        let w = self.params.angular_frequency();
        let period = self.params.period();

        let mut values = vec![0.0; steps];

        // First quarter: evaluate the truncated series directly. The time
        // normalization `time = P·i/steps` is the defined behavior of this
        // fit, not a conventional `i/steps` sample spacing.
        for (i, value) in values.iter_mut().enumerate().take(steps / 4 + 1) {
            let time = period * i as f64 / steps as f64;
            let x = w * time;
            *value = sine_taylor(x, term_count);
        }

        // Second quarter mirrors the first quarter's tail.
        for i in steps / 4..steps / 2 {
            values[i] = values[steps / 2 - i];
        }

        // Second half negates the first half.
        for i in steps / 2..steps {
            values[i] = -values[i - steps / 2];
        }

        values
    }
}
