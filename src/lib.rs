//! # delivery-routing
//!
//! Delivery-route optimization over small travel-time matrices: an exact
//! Held–Karp subset-DP solver and a nearest-neighbor heuristic over one
//! shared data contract.
//!
//! ## Modules
//!
//! - [`models`] — Shared data contract ([`models::CostModel`], [`models::RouteResult`])
//! - [`time`] — Dense integer travel-time matrix
//! - [`solver`] — The two solvers: exact Held–Karp DP and greedy nearest neighbor
//! - [`io`] — Text-format parsing of points and matrix
//! - [`render`] — ASCII-grid and SVG route visualization
//! - [`error`] — Error enum and `Result` alias

pub mod error;
pub mod io;
pub mod models;
pub mod render;
pub mod solver;
pub mod time;

pub use error::{Error, Result};
