//! Series fitting.
//!
//! Responsibilities:
//!
//! - grow the truncated Taylor expansion until the table passes the
//!   accuracy check (`fitter`)
//! - measure table accuracy against the true sine samples (`accuracy`)

pub mod accuracy;
pub mod fitter;

pub use accuracy::*;
pub use fitter::*;
