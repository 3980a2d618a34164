//! Synthetic input-vector generation for the demo driver.

pub mod input;

pub use input::*;
