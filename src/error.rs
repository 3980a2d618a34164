//! App-wide error type.
//!
//! Two failure classes exist:
//!
//! - `Config`: malformed parameters, rejected eagerly before any work starts
//! - `NonConvergence`: the fit exhausted its term budget without passing the
//!   accuracy check (no partial table is ever returned)
//!
//! Each maps to a stable process exit code so scripts can distinguish them.

/// Errors produced by the fitting pipeline and the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Invalid configuration or parameters.
    Config(String),
    /// The fit did not reach the tolerance within `max_terms` attempts.
    NonConvergence {
        /// Number of attempts made (== the configured term cap).
        max_terms: usize,
        /// RMS deviation of the last (most accurate) attempt.
        rms_deviation: f64,
    },
}

impl FitError {
    pub fn config(message: impl Into<String>) -> Self {
        FitError::Config(message.into())
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            FitError::Config(_) => 2,
            FitError::NonConvergence { .. } => 3,
        }
    }
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::Config(message) => write!(f, "{message}"),
            FitError::NonConvergence {
                max_terms,
                rms_deviation,
            } => write!(
                f,
                "Fit did not converge within {max_terms} terms (last RMS deviation: {rms_deviation:.6})."
            ),
        }
    }
}

impl std::error::Error for FitError {}
