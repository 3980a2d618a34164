//! Shared fit pipeline used by both the `fit` and `demo` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate config -> fit to convergence -> report
//!
//! The commands then focus on presentation (summaries, plots, prediction
//! trials).

use crate::domain::{FitConfig, FitParameters, FitReport};
use crate::error::FitError;
use crate::fit::{DiagnosticsSink, SeriesFitter};

/// All computed outputs of a single fit run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub params: FitParameters,
    pub report: FitReport,
}

/// Validate the config and run the fit to convergence.
///
/// Per-attempt diagnostics go to `sink` as they happen; pass
/// [`crate::fit::NullSink`] to discard them.
pub fn run_fit(config: &FitConfig, sink: &mut dyn DiagnosticsSink) -> Result<RunOutput, FitError> {
    let params = config.parameters()?;
    let fitter = SeriesFitter::new(params);
    let report = fitter.fit_with_diagnostics(sink)?;
    Ok(RunOutput { params, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InputDistribution;
    use crate::fit::NullSink;

    fn config() -> FitConfig {
        FitConfig {
            freq: 50.0,
            steps: 360,
            tolerance: 0.001,
            max_terms: 32,
            trials: 5,
            input_len: 1000,
            seed: 42,
            distribution: InputDistribution::Uniform,
            plot: false,
            plot_width: 100,
            plot_height: 25,
        }
    }

    #[test]
    fn pipeline_fits_the_standard_scenario() {
        let run = run_fit(&config(), &mut NullSink).unwrap();
        assert!(run.report.term_count <= 6);
        assert!(run.report.rms_deviation <= 0.001);
        assert_eq!(run.report.table.len(), 360);
    }

    #[test]
    fn pipeline_rejects_bad_steps() {
        let mut cfg = config();
        cfg.steps = 361;
        let err = run_fit(&cfg, &mut NullSink).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn pipeline_surfaces_non_convergence() {
        let mut cfg = config();
        cfg.max_terms = 1;
        let err = run_fit(&cfg, &mut NullSink).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
