//! Reporting: formatted run summaries, convergence diagnostics, and the
//! concrete observer views.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;
pub mod views;

pub use format::*;
pub use views::*;
