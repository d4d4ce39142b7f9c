//! Route solvers over a shared [`CostModel`](crate::models::CostModel).
//!
//! - [`held_karp`] — Exact minimum-cost tour via subset DP, O(n² · 2^n),
//!   capped at [`MAX_EXACT_POINTS`] points
//! - [`nearest_neighbor`] — Greedy approximate tour, O(n²), any size
//!
//! Both are synchronous pure functions: all working state lives inside one
//! call, so solving the same borrowed model from several threads is safe.

mod held_karp;
mod nearest_neighbor;

pub use held_karp::{held_karp, MAX_EXACT_POINTS};
pub use nearest_neighbor::nearest_neighbor;
