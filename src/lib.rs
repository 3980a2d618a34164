//! `sine-fit` library crate.
//!
//! The binary (`sinefit`) is a thin wrapper around this library so that:
//!
//! - the fitting engine and predictor are testable without spawning processes
//! - modules are reusable (e.g., embedding the fitter in another tool)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod plot;
pub mod predict;
pub mod report;
