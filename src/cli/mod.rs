//! Command-line parsing for the Taylor sine fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the fitting/math code.

use clap::{Parser, Subcommand};

use crate::domain::InputDistribution;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sinefit", version, about = "Taylor-series sine fitter with prediction broadcasting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the coefficient table, print convergence diagnostics and a summary.
    Fit(FitArgs),
    /// Fit, then run prediction trials over synthetic inputs, broadcasting
    /// each prediction to the attached views.
    Demo(FitArgs),
}

/// Common options for fitting and the demo loop.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Waveform frequency (Hz).
    #[arg(short = 'f', long, default_value_t = 50.0)]
    pub freq: f64,

    /// Samples per period (must be divisible by 4).
    #[arg(short = 's', long, default_value_t = 360)]
    pub steps: usize,

    /// RMS-deviation tolerance for convergence.
    #[arg(short = 't', long, default_value_t = 0.001)]
    pub tolerance: f64,

    /// Safety cap on series terms per fit.
    #[arg(long, default_value_t = 32)]
    pub max_terms: usize,

    /// Number of demo prediction trials.
    #[arg(long, default_value_t = 5)]
    pub trials: usize,

    /// Length of each synthetic input vector.
    #[arg(long, default_value_t = 1000)]
    pub input_len: usize,

    /// Random seed for input generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Distribution for synthetic input values.
    #[arg(long, value_enum, default_value_t = InputDistribution::Uniform)]
    pub dist: InputDistribution,

    /// Render an ASCII plot of the fitted table (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
