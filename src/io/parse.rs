//! Text-format parsing of points and travel-time matrix.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::CostModel;
use crate::time::TimeMatrix;

/// Parses a cost model from its text representation.
///
/// The first line holds the comma-separated point labels; each of the next
/// N lines holds one comma-separated matrix row of non-negative integers.
/// Surrounding whitespace around labels and values is ignored. Malformed
/// input surfaces as [`Error::InvalidFormat`] with the offending line, so a
/// bad file never reaches a solver.
///
/// # Examples
///
/// ```
/// use delivery_routing::io::parse_model;
///
/// let model = parse_model("A,B\n0,10\n10,0\n").expect("well-formed");
/// assert_eq!(model.points(), &["A".to_string(), "B".to_string()]);
/// assert_eq!(model.time(0, 1), 10);
/// ```
pub fn parse_model(input: &str) -> Result<CostModel> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| Error::invalid_format("input must start with a line of point labels"))?;

    let points: Vec<String> = header.split(',').map(|s| s.trim().to_string()).collect();
    let n = points.len();

    let rows: Vec<&str> = lines.filter(|l| !l.trim().is_empty()).collect();
    if rows.len() != n {
        return Err(Error::invalid_format(format!(
            "expected {} matrix rows to match {} labels, found {}",
            n,
            n,
            rows.len()
        )));
    }

    let mut matrix = TimeMatrix::new(n);
    for (i, row) in rows.iter().enumerate() {
        let values: Vec<&str> = row.split(',').map(str::trim).collect();
        if values.len() != n {
            return Err(Error::RaggedMatrix {
                row: i,
                width: values.len(),
                size: n,
            });
        }
        for (j, value) in values.iter().enumerate() {
            let time = value.parse::<u64>().map_err(|_| {
                Error::invalid_format(format!(
                    "matrix row {}: '{}' is not a non-negative integer",
                    i, value
                ))
            })?;
            matrix.set(i, j, time);
        }
    }

    CostModel::new(points, matrix)
}

/// Reads and parses a cost model from a file.
pub fn read_model(path: &Path) -> Result<CostModel> {
    let content = fs::read_to_string(path)?;
    parse_model(&content)
}
