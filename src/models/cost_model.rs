//! Delivery cost model.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::time::TimeMatrix;

/// An immutable routing instance: named delivery points plus the square
/// travel-time matrix between them.
///
/// Shape is validated at construction, so a `CostModel` handed to a solver
/// always satisfies `points.len() == time.size() >= 1`. The model is never
/// mutated after construction; solvers only borrow it.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::CostModel;
/// use delivery_routing::time::TimeMatrix;
///
/// let time = TimeMatrix::from_rows(&[vec![0, 10], vec![10, 0]]).expect("square");
/// let model = CostModel::new(vec!["A".into(), "B".into()], time).expect("valid");
/// assert_eq!(model.len(), 2);
/// assert_eq!(model.label(1), "B");
/// assert_eq!(model.time(0, 1), 10);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CostModel {
    points: Vec<String>,
    time: TimeMatrix,
}

impl CostModel {
    /// Creates a cost model from point labels and a travel-time matrix.
    ///
    /// Returns [`Error::DegenerateInput`] for an empty point list and
    /// [`Error::InvalidShape`] when the label count does not match the
    /// matrix dimension.
    pub fn new(points: Vec<String>, time: TimeMatrix) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::DegenerateInput);
        }
        if points.len() != time.size() {
            return Err(Error::InvalidShape {
                points: points.len(),
                rows: time.size(),
            });
        }
        Ok(Self { points, time })
    }

    /// Number of delivery points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction rejects empty models.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the label of point `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn label(&self, index: usize) -> &str {
        &self.points[index]
    }

    /// Returns all point labels in order.
    pub fn points(&self) -> &[String] {
        &self.points
    }

    /// Travel time from point `from` to point `to`.
    pub fn time(&self, from: usize, to: usize) -> u64 {
        self.time.get(from, to)
    }

    /// Returns the underlying travel-time matrix.
    pub fn matrix(&self) -> &TimeMatrix {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_model() {
        let time = TimeMatrix::from_rows(&[vec![0, 5], vec![7, 0]]).expect("square");
        let model = CostModel::new(vec!["A".into(), "B".into()], time).expect("valid");
        assert_eq!(model.len(), 2);
        assert!(!model.is_empty());
        assert_eq!(model.points(), &["A".to_string(), "B".to_string()]);
        assert_eq!(model.time(1, 0), 7);
    }

    #[test]
    fn test_shape_mismatch() {
        let time = TimeMatrix::new(3);
        let err = CostModel::new(vec!["A".into(), "B".into()], time).unwrap_err();
        assert!(matches!(err, Error::InvalidShape { points: 2, rows: 3 }));
    }

    #[test]
    fn test_empty_rejected() {
        let err = CostModel::new(Vec::new(), TimeMatrix::new(0)).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput));
    }

    #[test]
    fn test_single_point() {
        let model = CostModel::new(vec!["Depot".into()], TimeMatrix::new(1)).expect("valid");
        assert_eq!(model.len(), 1);
        assert_eq!(model.label(0), "Depot");
        assert_eq!(model.time(0, 0), 0);
    }
}
