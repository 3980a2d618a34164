//! Prediction over a fitted table, with observer broadcasting.
//!
//! Responsibilities:
//!
//! - compute truncated dot-product predictions against input vectors
//! - notify registered observers of each prediction, in attachment order

pub mod observer;
pub mod predictor;

pub use observer::*;
pub use predictor::*;
