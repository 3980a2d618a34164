//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks of the fitted period in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - fitted table values: `*`
//! - zero axis: `.`

use crate::domain::CoefficientTable;

/// Render the fitted table as a fixed-size character grid.
pub fn render_table_plot(table: &CoefficientTable, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = value_range(table.as_slice()).unwrap_or((-1.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Zero axis first so the curve can overlay it.
    if y_min <= 0.0 && 0.0 <= y_max {
        let axis_row = map_y(0.0, y_min, y_max, height);
        for cell in &mut grid[axis_row] {
            *cell = '.';
        }
    }

    for (i, &value) in table.as_slice().iter().enumerate() {
        let x = map_x(i, table.len(), width);
        let y = map_y(value, y_min, y_max, height);
        grid[y][x] = '*';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: samples=[0, {}) | y=[{y_min:.3}, {y_max:.3}]\n",
        table.len()
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for &v in values {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    if min_v.is_finite() && max_v.is_finite() && max_v > min_v {
        Some((min_v, max_v))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let pad = (max - min) * frac;
    (min - pad, max + pad)
}

fn map_x(index: usize, len: usize, width: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let u = index as f64 / (len as f64 - 1.0);
    ((u * (width as f64 - 1.0)).round() as usize).min(width - 1)
}

fn map_y(value: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let span = y_max - y_min;
    let u = if span > 0.0 { (value - y_min) / span } else { 0.5 };
    let row = ((1.0 - u) * (height as f64 - 1.0)).round() as usize;
    row.min(height - 1)
}
