//! Terminal plotting for the fitted table.

pub mod ascii;

pub use ascii::*;
