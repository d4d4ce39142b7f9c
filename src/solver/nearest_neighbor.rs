//! Heuristic solver: greedy nearest-neighbor expansion.
//!
//! # Algorithm
//!
//! Starting from the chosen point, repeatedly step to the unvisited point
//! with the smallest travel time from the current position, then close the
//! cycle back to the start. Ties resolve to the lowest point index.
//!
//! # Complexity
//!
//! O(n²): one linear scan of the unvisited points per step.
//!
//! This is the fast counterpart to [`held_karp`](super::held_karp): no
//! optimality guarantee, but its cost is never below the exact optimum for
//! the same model and start.

use crate::error::{Error, Result};
use crate::models::{CostModel, RouteResult};

/// Builds a closed tour with the nearest-neighbor heuristic.
///
/// The tour starts and ends at `start` and visits every other point exactly
/// once. When several unvisited points are equally near, the lowest index
/// wins (strict `<` on the best-so-far update), keeping results
/// deterministic across calls.
///
/// Returns [`Error::InvalidStart`] when `start` is not a point index.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::CostModel;
/// use delivery_routing::solver::nearest_neighbor;
/// use delivery_routing::time::TimeMatrix;
///
/// let time = TimeMatrix::from_rows(&[
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).expect("square");
/// let labels = ["A", "B", "C", "D"].map(String::from).to_vec();
/// let model = CostModel::new(labels, time).expect("valid");
///
/// let route = nearest_neighbor(&model, 0).expect("valid start");
/// assert_eq!(route.sequence(), &[0, 1, 3, 2, 0]);
/// assert_eq!(route.total_cost(), 80);
/// ```
pub fn nearest_neighbor(model: &CostModel, start: usize) -> Result<RouteResult> {
    let n = model.len();
    if start >= n {
        return Err(Error::InvalidStart { start, len: n });
    }

    let mut visited = vec![false; n];
    visited[start] = true;

    let mut sequence = Vec::with_capacity(n + 1);
    sequence.push(start);

    let mut current = start;
    let mut total_cost: u64 = 0;

    // One step per remaining point; the scan always finds a candidate.
    for _ in 0..n - 1 {
        let mut nearest = usize::MAX;
        let mut min_time = u64::MAX;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let time = model.time(current, candidate);
            if time < min_time {
                min_time = time;
                nearest = candidate;
            }
        }

        visited[nearest] = true;
        sequence.push(nearest);
        total_cost += min_time;
        current = nearest;
    }

    // Close the cycle.
    total_cost += model.time(current, start);
    sequence.push(start);

    Ok(RouteResult::new(sequence, total_cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeMatrix;

    fn model_from(labels: &[&str], rows: &[Vec<u64>]) -> CostModel {
        let time = TimeMatrix::from_rows(rows).expect("square");
        let points = labels.iter().map(|s| s.to_string()).collect();
        CostModel::new(points, time).expect("valid")
    }

    fn four_point_model() -> CostModel {
        model_from(
            &["A", "B", "C", "D"],
            &[
                vec![0, 10, 15, 20],
                vec![10, 0, 35, 25],
                vec![15, 35, 0, 30],
                vec![20, 25, 30, 0],
            ],
        )
    }

    #[test]
    fn test_four_point_greedy_walk() {
        // A -> B (10), B -> D (25), D -> C (30), C -> A (15).
        let route = nearest_neighbor(&four_point_model(), 0).expect("valid start");
        assert_eq!(route.sequence(), &[0, 1, 3, 2, 0]);
        assert_eq!(route.total_cost(), 80);
    }

    #[test]
    fn test_start_from_other_point() {
        let route = nearest_neighbor(&four_point_model(), 2).expect("valid start");
        assert_eq!(route.start(), 2);
        assert_eq!(route.sequence().len(), 5);
        assert_eq!(route.sequence()[4], 2);
        // C -> A (15), A -> B (10), B -> D (25), D -> C (30).
        assert_eq!(route.sequence(), &[2, 0, 1, 3, 2]);
        assert_eq!(route.total_cost(), 80);
    }

    #[test]
    fn test_invalid_start() {
        let err = nearest_neighbor(&four_point_model(), 4).unwrap_err();
        assert!(matches!(err, Error::InvalidStart { start: 4, len: 4 }));
    }

    #[test]
    fn test_single_point() {
        let model = model_from(&["A"], &[vec![0]]);
        let route = nearest_neighbor(&model, 0).expect("valid start");
        assert_eq!(route.sequence(), &[0, 0]);
        assert_eq!(route.total_cost(), 0);
    }

    #[test]
    fn test_tie_break_prefers_lower_index() {
        let model = model_from(
            &["A", "B", "C"],
            &[vec![0, 5, 5], vec![5, 0, 5], vec![5, 5, 0]],
        );
        let route = nearest_neighbor(&model, 0).expect("valid start");
        assert_eq!(route.sequence(), &[0, 1, 2, 0]);
        assert_eq!(route.total_cost(), 15);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let model = four_point_model();
        let first = nearest_neighbor(&model, 0).expect("valid start");
        let second = nearest_neighbor(&model, 0).expect("valid start");
        assert_eq!(first, second);
    }

    #[test]
    fn test_greedy_can_be_suboptimal() {
        // Greedy from A grabs the cheap A -> B edge and is then forced over
        // the expensive B -> C leg: 1 + 20 + 3 = 24. The optimum goes the
        // other way around: A -> C -> B -> A = 5 + 2 + 2 = 9.
        let model = model_from(
            &["A", "B", "C"],
            &[vec![0, 1, 5], vec![2, 0, 20], vec![3, 2, 0]],
        );
        let greedy = nearest_neighbor(&model, 0).expect("valid start");
        let exact = crate::solver::held_karp(&model).expect("within limit");
        assert!(greedy.total_cost() > exact.total_cost());
        assert_eq!(greedy.sequence(), &[0, 1, 2, 0]);
        assert_eq!(greedy.total_cost(), 24);
        assert_eq!(exact.sequence(), &[0, 2, 1, 0]);
        assert_eq!(exact.total_cost(), 9);
    }
}
