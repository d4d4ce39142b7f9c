//! Travel-time matrices.
//!
//! Provides a dense integer travel-time matrix for routing problems.

mod matrix;

pub use matrix::TimeMatrix;
