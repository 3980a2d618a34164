//! Truncated odd-power Taylor expansion of sine.
//!
//! The series is:
//!
//! ```text
//! sin(x) ≈ Σ_{n=0}^{terms-1} (-1)^n · x^(2n+1) / (2n+1)!
//! ```
//!
//! Numerical notes:
//! - Factorials are accumulated in `f64`; the largest power this project
//!   reaches in practice is tiny (single-digit term counts), far below the
//!   point where `f64` factorials lose integer precision (`22!`).
//! - The sign alternation is exact (`±1.0`), not computed via `pow(-1, n)`.

/// `n!` as an `f64`.
pub fn factorial(n: u32) -> f64 {
    let mut result = 1.0;
    for i in 1..=n {
        result *= i as f64;
    }
    result
}

/// Evaluate the truncated sine series at `x` with the given number of terms.
///
/// With `terms == 1` this is the small-angle approximation `sin(x) ≈ x`.
pub fn sine_taylor(x: f64, terms: usize) -> f64 {
    let mut acc = 0.0;
    for n in 0..terms {
        let power = 2 * n as u32 + 1;
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        acc += sign * x.powi(power as i32) / factorial(power);
    }
    acc
}
