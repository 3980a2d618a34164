//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - validated fit parameters (`FitParameters`)
//! - the fitted coefficient table (`CoefficientTable`)
//! - fit outputs and per-attempt diagnostics (`FitReport`, `FitAttempt`)
//! - driver configuration (`FitConfig`, `InputDistribution`)

pub mod types;

pub use types::*;
