//! Dot-product predictions broadcast to registered observers.

use std::rc::Rc;

use nalgebra::DVector;

use crate::domain::CoefficientTable;
use crate::predict::observer::PredictionObserver;

/// Holds a fitted table and an ordered observer registration list.
///
/// Observers are shared handles (`Rc`): the predictor neither owns nor
/// destroys them, it only appends and notifies. There is no removal
/// operation and no deduplication; attaching the same observer twice means
/// it is notified twice.
pub struct Predictor {
    table: CoefficientTable,
    observers: Vec<Rc<dyn PredictionObserver>>,
}

impl Predictor {
    pub fn new(table: CoefficientTable) -> Self {
        Self {
            table,
            observers: Vec::new(),
        }
    }

    pub fn table(&self) -> &CoefficientTable {
        &self.table
    }

    /// Append an observer. Attachment order defines notification order.
    pub fn attach(&mut self, observer: Rc<dyn PredictionObserver>) {
        self.observers.push(observer);
    }

    /// Compute the truncated dot product of the table and `input`, then
    /// notify every observer with the result before returning.
    ///
    /// Vectors longer than the table are silently truncated; shorter vectors
    /// (including empty ones) use only the overlapping prefix. An empty
    /// overlap yields `0.0`, which is still broadcast.
    pub fn predict(&self, input: &[f64]) -> f64 {
        let n = self.table.len().min(input.len());
        let weights = DVector::from_column_slice(&self.table.as_slice()[..n]);
        let values = DVector::from_column_slice(&input[..n]);
        let prediction = weights.dot(&values);

        for observer in &self.observers {
            observer.on_prediction(prediction);
        }
        prediction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Observer that records every value it receives, tagged with its id.
    struct Recorder {
        id: &'static str,
        log: Rc<RefCell<Vec<(&'static str, f64)>>>,
    }

    impl PredictionObserver for Recorder {
        fn on_prediction(&self, value: f64) {
            self.log.borrow_mut().push((self.id, value));
        }
    }

    fn table(values: &[f64]) -> CoefficientTable {
        CoefficientTable::new(values.to_vec())
    }

    #[test]
    fn empty_input_predicts_zero_and_still_notifies() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut predictor = Predictor::new(table(&[0.5, 1.0]));
        predictor.attach(Rc::new(Recorder {
            id: "a",
            log: Rc::clone(&log),
        }));

        assert_eq!(predictor.predict(&[]), 0.0);
        assert_eq!(*log.borrow(), vec![("a", 0.0)]);
    }

    #[test]
    fn long_input_is_truncated_to_the_table_length() {
        let predictor = Predictor::new(table(&[1.0, 2.0, 3.0]));
        let long = [1.0, 1.0, 1.0, 99.0, -7.5];
        assert_eq!(predictor.predict(&long), predictor.predict(&long[..3]));
        assert_eq!(predictor.predict(&long), 6.0);
    }

    #[test]
    fn short_input_uses_only_the_overlap() {
        let predictor = Predictor::new(table(&[1.0, 2.0, 3.0]));
        assert_eq!(predictor.predict(&[2.0]), 2.0);
    }

    #[test]
    fn basis_vector_extracts_the_first_coefficient() {
        let predictor = Predictor::new(table(&[0.25, 0.5, 0.75]));
        let mut input = vec![0.0; 3];
        input[0] = 1.0;
        assert_eq!(predictor.predict(&input), 0.25);
    }

    #[test]
    fn observers_are_notified_in_attachment_order_with_the_same_value() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut predictor = Predictor::new(table(&[1.0, 1.0]));
        predictor.attach(Rc::new(Recorder {
            id: "first",
            log: Rc::clone(&log),
        }));
        predictor.attach(Rc::new(Recorder {
            id: "second",
            log: Rc::clone(&log),
        }));

        let value = predictor.predict(&[3.0, 4.0]);
        assert_eq!(value, 7.0);
        assert_eq!(*log.borrow(), vec![("first", 7.0), ("second", 7.0)]);
    }

    #[test]
    fn predictions_without_observers_are_fine() {
        let predictor = Predictor::new(table(&[2.0]));
        assert_eq!(predictor.predict(&[3.0]), 6.0);
    }
}
