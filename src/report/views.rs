//! Concrete prediction observers.
//!
//! Both views render to stdout; the predictor never knows or cares. The
//! gauge view stands in for a "graphical" display using a deterministic
//! fixed-width bar.

use crate::predict::PredictionObserver;

/// Prints each prediction as a plain line.
pub struct ConsoleView;

impl PredictionObserver for ConsoleView {
    fn on_prediction(&self, value: f64) {
        println!("Console Prediction: {value:.6}");
    }
}

/// Renders each prediction as a fixed-width bar scaled against `max_value`.
pub struct GaugeView {
    width: usize,
    max_value: f64,
}

impl GaugeView {
    /// `max_value` is the value that fills the gauge; larger predictions
    /// saturate it. Must be > 0 (callers pick a scale that suits their
    /// input magnitudes).
    pub fn new(width: usize, max_value: f64) -> Self {
        Self {
            width: width.max(1),
            max_value: max_value.max(f64::MIN_POSITIVE),
        }
    }

    fn render(&self, value: f64) -> String {
        let fill = (value / self.max_value).clamp(0.0, 1.0);
        let filled = (fill * self.width as f64).round() as usize;
        let mut bar = String::with_capacity(self.width + 2);
        bar.push('[');
        for i in 0..self.width {
            bar.push(if i < filled { '#' } else { ' ' });
        }
        bar.push(']');
        format!("Gauge Prediction: {bar} {value:.6}")
    }
}

impl PredictionObserver for GaugeView {
    fn on_prediction(&self, value: f64) {
        println!("{}", self.render(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_fills_proportionally() {
        let view = GaugeView::new(10, 2.0);
        assert_eq!(view.render(1.0), "Gauge Prediction: [#####     ] 1.000000");
    }

    #[test]
    fn gauge_saturates_and_floors() {
        let view = GaugeView::new(4, 1.0);
        assert_eq!(view.render(5.0), "Gauge Prediction: [####] 5.000000");
        assert_eq!(view.render(-3.0), "Gauge Prediction: [    ] -3.000000");
    }

    #[test]
    fn degenerate_dimensions_are_clamped() {
        let view = GaugeView::new(0, 0.0);
        // Width clamps to 1; any positive value saturates the tiny scale.
        assert_eq!(view.render(0.5), "Gauge Prediction: [#] 0.500000");
    }
}
