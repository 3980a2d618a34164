//! Formatted terminal output for fit runs.

use crate::domain::{FitAttempt, FitParameters, FitReport};
use crate::fit::DiagnosticsSink;

/// Format the full run summary (parameters + attempt history + result).
pub fn format_run_summary(params: &FitParameters, report: &FitReport) -> String {
    let mut out = String::new();

    out.push_str("=== sinefit - Taylor sine fit ===\n");
    out.push_str(&format!(
        "Params: freq={} Hz | steps={} | tolerance={:.6} | max_terms={}\n",
        params.freq(),
        params.steps(),
        params.tolerance(),
        params.max_terms()
    ));
    out.push_str(&format!(
        "Converged: terms={} | rms={:.6}\n",
        report.term_count, report.rms_deviation
    ));

    out.push_str("\nAttempts:\n");
    out.push_str(&format!("{:>6} {:>12} {:<10}\n", "terms", "rms", "status"));
    for attempt in &report.attempts {
        out.push_str(&format_attempt_row(attempt));
        out.push('\n');
    }

    out
}

fn format_attempt_row(attempt: &FitAttempt) -> String {
    let status = if attempt.accurate {
        "accurate"
    } else {
        "inaccurate"
    };
    format!(
        "{:>6} {:>12.6} {:<10}",
        attempt.term_count, attempt.rms_deviation, status
    )
}

/// Diagnostics sink that prints each convergence attempt as it happens.
///
/// The "accurate"/"inaccurate" wording is the contract; the exact layout is
/// presentation only.
pub struct ConsoleDiagnostics;

impl DiagnosticsSink for ConsoleDiagnostics {
    fn on_attempt(&mut self, attempt: &FitAttempt) {
        if attempt.accurate {
            println!("terms={}: the model is accurate", attempt.term_count);
        } else {
            println!(
                "terms={}: rms deviation {:.6}, the model is inaccurate",
                attempt.term_count, attempt.rms_deviation
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CoefficientTable;

    #[test]
    fn summary_lists_every_attempt() {
        let params = FitParameters::new(50.0, 360, 0.001).unwrap();
        let report = FitReport {
            table: CoefficientTable::new(vec![0.0; 360]),
            term_count: 2,
            rms_deviation: 0.0005,
            attempts: vec![
                FitAttempt {
                    term_count: 1,
                    rms_deviation: 0.42,
                    accurate: false,
                },
                FitAttempt {
                    term_count: 2,
                    rms_deviation: 0.0005,
                    accurate: true,
                },
            ],
        };

        let summary = format_run_summary(&params, &report);
        assert!(summary.contains("Converged: terms=2"));
        assert!(summary.contains("0.420000"));
        assert!(summary.contains("inaccurate"));
        assert!(summary.contains("accurate"));
        assert!(summary.contains("max_terms=32"));
    }

    #[test]
    fn attempt_rows_label_status() {
        let row = format_attempt_row(&FitAttempt {
            term_count: 3,
            rms_deviation: 0.1,
            accurate: false,
        });
        assert!(row.contains("inaccurate"));

        let row = format_attempt_row(&FitAttempt {
            term_count: 4,
            rms_deviation: 0.0001,
            accurate: true,
        });
        assert!(row.trim_end().ends_with("accurate"));
    }
}
