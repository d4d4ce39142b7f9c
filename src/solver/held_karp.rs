//! Exact solver: Held–Karp subset dynamic programming.
//!
//! # Algorithm
//!
//! Define `cost(pos, mask)` as the cheapest way to stand at `pos` with the
//! points in `mask` already visited, visit everything else, and return to
//! the origin (index 0):
//!
//! ```text
//! cost(pos, full)  = time(pos, 0)
//! cost(pos, mask)  = min over unvisited q of time(pos, q) + cost(q, mask | q)
//! ```
//!
//! Each `(pos, mask)` state is solved at most once. The minimizing `q` is
//! recorded per state so the optimal tour can be reconstructed by walking
//! the recorded choices forward from the origin.
//!
//! Memoization uses dense tables indexed by `pos * 2^n + mask` rather than
//! a hash map keyed by composed state strings: with n capped at 15 the
//! tables stay small and lookups are a single index computation.
//!
//! # Complexity
//!
//! O(n² · 2^n) time, O(n · 2^n) space. The cap of [`MAX_EXACT_POINTS`]
//! keeps both tractable; larger inputs are rejected up front rather than
//! left to run for hours.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of the SIAM* 10(1), 196-210.

use crate::error::{Error, Result};
use crate::models::{CostModel, RouteResult};
use crate::time::TimeMatrix;

/// Largest model the exact solver accepts.
///
/// The state space is `n · 2^n`; beyond 15 points the subset DP stops being
/// interactive, so anything larger fails fast with
/// [`Error::SizeLimitExceeded`] instead of silently grinding.
pub const MAX_EXACT_POINTS: usize = 15;

/// Sentinel for a memo slot that has not been solved yet. No reachable
/// state can cost this much, because every state always has at least one
/// finite candidate transition.
const UNSOLVED: u64 = u64::MAX;

/// Per-invocation memo tables, created fresh inside [`held_karp`] and
/// dropped on return so no state leaks between solves.
struct MemoTable {
    /// `cost[pos << n | mask]` = minimal completion cost for that state.
    cost: Vec<u64>,
    /// `next[pos << n | mask]` = the minimizing next point for that state.
    next: Vec<usize>,
}

impl MemoTable {
    fn new(n: usize) -> Self {
        let states = n << n;
        Self {
            cost: vec![UNSOLVED; states],
            next: vec![usize::MAX; states],
        }
    }
}

/// Finds the minimum-cost closed tour from point 0 by Held–Karp subset DP.
///
/// The tour starts and ends at index 0 and visits every other point exactly
/// once. Ties between equally cheap continuations resolve to the lowest
/// point index, so repeated solves of the same model are bit-for-bit
/// identical.
///
/// Returns [`Error::SizeLimitExceeded`] for models larger than
/// [`MAX_EXACT_POINTS`].
///
/// # Examples
///
/// ```
/// use delivery_routing::models::CostModel;
/// use delivery_routing::solver::held_karp;
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
/// let route = held_karp(&model).expect("within size limit");
/// assert_eq!(route.total_cost(), 80);
/// assert_eq!(route.sequence(), &[0, 1, 3, 2, 0]);
/// ```
pub fn held_karp(model: &CostModel) -> Result<RouteResult> {
    let n = model.len();
    if n > MAX_EXACT_POINTS {
        return Err(Error::SizeLimitExceeded {
            size: n,
            max: MAX_EXACT_POINTS,
        });
    }

    let mut memo = MemoTable::new(n);
    // Origin 0 starts visited: mask = 1.
    let total_cost = solve(0, 1, model.matrix(), &mut memo);
    let sequence = reconstruct(n, &memo);

    Ok(RouteResult::new(sequence, total_cost))
}

fn solve(pos: usize, visited: u32, matrix: &TimeMatrix, memo: &mut MemoTable) -> u64 {
    let n = matrix.size();
    let full = (1u32 << n) - 1;

    // All points visited: close the cycle back to the origin.
    if visited == full {
        return matrix.get(pos, 0);
    }

    let key = (pos << n) | visited as usize;
    if memo.cost[key] != UNSOLVED {
        return memo.cost[key];
    }

    let mut min_cost = u64::MAX;
    let mut min_next = usize::MAX;
    for next in 0..n {
        if visited & (1 << next) != 0 {
            continue;
        }
        let cost = matrix.get(pos, next) + solve(next, visited | (1 << next), matrix, memo);
        // Strict comparison: on ties the lowest index, seen first, stays.
        if cost < min_cost {
            min_cost = cost;
            min_next = next;
        }
    }

    memo.cost[key] = min_cost;
    memo.next[key] = min_next;
    min_cost
}

/// Walks the recorded minimizing choices forward from the origin.
fn reconstruct(n: usize, memo: &MemoTable) -> Vec<usize> {
    let mut sequence = Vec::with_capacity(n + 1);
    sequence.push(0);

    let mut pos = 0;
    let mut visited: u32 = 1;
    for _ in 0..n.saturating_sub(1) {
        let key = (pos << n) | visited as usize;
        let next = memo.next[key];
        sequence.push(next);
        visited |= 1 << next;
        pos = next;
    }

    sequence.push(0);
    sequence
}
