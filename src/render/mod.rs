//! Route visualization.
//!
//! Renderers consume a solved [`RouteResult`](crate::models::RouteResult)
//! and the model it came from, read-only, and produce plain strings:
//!
//! - [`render_ascii`] — character grid for terminal output
//! - [`render_svg`] — circle-layout vector diagram

mod ascii;
mod svg;

pub use ascii::render_ascii;
pub use svg::render_svg;
