//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the fit pipeline
//! - prints summaries/plots
//! - drives the demo prediction loop

use std::rc::Rc;

use clap::Parser;

use crate::cli::{Command, FitArgs};
use crate::data::generate_inputs;
use crate::domain::FitConfig;
use crate::error::FitError;
use crate::predict::Predictor;
use crate::report::{ConsoleDiagnostics, ConsoleView, GaugeView};

pub mod pipeline;

/// Gauge saturation value for demo predictions.
///
/// Uniform unit inputs against the fitted table land well inside ±10, so a
/// 10.0 full-scale keeps the bar readable without tuning per run.
const GAUGE_FULL_SCALE: f64 = 10.0;

/// Entry point for the `sinefit` binary.
pub fn run() -> Result<(), FitError> {
    // Bare `sinefit` should behave like `sinefit demo` (the classic
    // fit-then-predict exercise). Clap requires a subcommand name, so we do
    // a small, explicit rewrite of the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Demo(args) => handle_demo(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), FitError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config, &mut ConsoleDiagnostics)?;

    println!(
        "\n{}",
        crate::report::format_run_summary(&run.params, &run.report)
    );

    if config.plot {
        let plot =
            crate::plot::render_table_plot(&run.report.table, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    Ok(())
}

fn handle_demo(args: FitArgs) -> Result<(), FitError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config, &mut ConsoleDiagnostics)?;

    let mut predictor = Predictor::new(run.report.table.clone());
    predictor.attach(Rc::new(ConsoleView));
    predictor.attach(Rc::new(GaugeView::new(40, GAUGE_FULL_SCALE)));

    let inputs = generate_inputs(&config)?;
    for (trial, input) in inputs.iter().enumerate() {
        println!("Trial {}:", trial + 1);
        predictor.predict(input);
        println!();
    }

    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        freq: args.freq,
        steps: args.steps,
        tolerance: args.tolerance,
        max_terms: args.max_terms,
        trials: args.trials,
        input_len: args.input_len,
        seed: args.seed,
        distribution: args.dist,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
    }
}

/// Rewrite argv so `sinefit` defaults to `sinefit demo`.
///
/// Rules:
/// - `sinefit`                      -> `sinefit demo`
/// - `sinefit --seed 7 ...`         -> `sinefit demo --seed 7 ...`
/// - `sinefit --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("demo".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "demo");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "demo flags".
    if arg1.starts_with('-') {
        argv.insert(1, "demo".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_demo() {
        assert_eq!(rewrite_args(argv(&["sinefit"])), argv(&["sinefit", "demo"]));
        assert_eq!(
            rewrite_args(argv(&["sinefit", "--seed", "7"])),
            argv(&["sinefit", "demo", "--seed", "7"])
        );
    }

    #[test]
    fn explicit_subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["sinefit", "fit"])),
            argv(&["sinefit", "fit"])
        );
        assert_eq!(
            rewrite_args(argv(&["sinefit", "--help"])),
            argv(&["sinefit", "--help"])
        );
    }

    #[test]
    fn config_from_args_resolves_plot_flags() {
        let args = crate::cli::FitArgs {
            freq: 50.0,
            steps: 360,
            tolerance: 0.001,
            max_terms: 32,
            trials: 5,
            input_len: 1000,
            seed: 42,
            dist: crate::domain::InputDistribution::Uniform,
            plot: true,
            no_plot: true,
            width: 80,
            height: 20,
        };
        let config = fit_config_from_args(&args);
        assert!(!config.plot);
        assert_eq!(config.steps, 360);
    }
}
