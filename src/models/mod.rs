//! Domain model types for delivery routing.
//!
//! Provides the shared data contract between the two solvers: an immutable
//! [`CostModel`] (named points plus a square travel-time matrix) and the
//! [`RouteResult`] every solver produces (a closed tour with its total cost).

mod cost_model;
mod route;

pub use cost_model::CostModel;
pub use route::RouteResult;
