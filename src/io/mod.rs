//! Reading delivery problems from text files.
//!
//! The format is one comma-separated label line followed by one matrix row
//! per point, e.g. for three points:
//!
//! ```text
//! A,B,C
//! 0,10,15
//! 10,0,35
//! 15,35,0
//! ```

mod parse;

pub use parse::{parse_model, read_model};
