//! Solver output: a closed delivery route.

use serde::{Deserialize, Serialize};

use super::CostModel;

/// A closed tour produced by a solver.
///
/// The sequence holds point indices into the model that produced it, starts
/// and ends at the same point, and visits every other point exactly once,
/// so its length is always N+1. `total_cost` is the sum of the travel times
/// along consecutive sequence entries.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{CostModel, RouteResult};
/// use delivery_routing::solver::nearest_neighbor;
/// use delivery_routing::time::TimeMatrix;
///
/// let time = TimeMatrix::from_rows(&[vec![0, 2], vec![3, 0]]).expect("square");
/// let model = CostModel::new(vec!["A".into(), "B".into()], time).expect("valid");
/// let route = nearest_neighbor(&model, 0).expect("valid start");
/// assert_eq!(route.sequence(), &[0, 1, 0]);
/// assert_eq!(route.total_cost(), 5);
/// assert_eq!(route.describe(&model), "A -> B -> A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    sequence: Vec<usize>,
    total_cost: u64,
}

impl RouteResult {
    /// Creates a route result. Solvers are the only producers.
    pub(crate) fn new(sequence: Vec<usize>, total_cost: u64) -> Self {
        Self {
            sequence,
            total_cost,
        }
    }

    /// Returns the visit order as point indices, start repeated at the end.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Total travel time along the route.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// The start (and end) point of the route.
    pub fn start(&self) -> usize {
        self.sequence[0]
    }

    /// Formats the route as labels joined by arrows, e.g. `A -> B -> A`.
    pub fn describe(&self, model: &CostModel) -> String {
        self.sequence
            .iter()
            .map(|&i| model.label(i))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Percentage by which this route's cost exceeds `baseline`'s.
    ///
    /// Returns 0.0 when the baseline cost is zero.
    pub fn gap_percent(&self, baseline: &RouteResult) -> f64 {
        if baseline.total_cost == 0 {
            return 0.0;
        }
        (self.total_cost as f64 - baseline.total_cost as f64) / baseline.total_cost as f64 * 100.0
    }
}
