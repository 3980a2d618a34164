//! The observer capability consumed by the predictor.

/// Accepts one prediction value.
///
/// Implementations are external collaborators (console views, gauges,
/// recorders); the predictor never inspects their side effects. They receive
/// values, never errors, and are notified synchronously: a panic in an
/// observer propagates to the `predict` caller.
pub trait PredictionObserver {
    fn on_prediction(&self, value: f64);
}
