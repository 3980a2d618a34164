//! Mathematical utilities: the truncated Taylor expansion of sine.

pub mod taylor;

pub use taylor::*;
