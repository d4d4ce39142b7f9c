//! Dense travel-time matrix.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A dense n×n travel-time matrix stored in row-major order.
///
/// Entries are non-negative integer travel times. The matrix need not be
/// symmetric; `time[i][i]` is 0 by convention (self-loops are never used by
/// the solvers).
///
/// # Examples
///
/// ```
/// use delivery_routing::time::TimeMatrix;
///
/// let tm = TimeMatrix::from_rows(&[vec![0, 10], vec![10, 0]]).expect("square");
/// assert_eq!(tm.get(0, 1), 10);
/// assert_eq!(tm.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeMatrix {
    data: Vec<u64>,
    size: usize,
}

impl TimeMatrix {
    /// Creates a travel-time matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a matrix from an explicit row-major grid.
    ///
    /// Returns [`Error::InvalidShape`] if the data length is not `size * size`.
    pub fn from_data(size: usize, data: Vec<u64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::InvalidShape {
                points: size,
                rows: data.len() / size.max(1),
            });
        }
        Ok(Self { data, size })
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// Returns [`Error::RaggedMatrix`] if any row's width differs from the
    /// number of rows.
    pub fn from_rows(rows: &[Vec<u64>]) -> Result<Self> {
        let size = rows.len();
        let mut tm = Self::new(size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(Error::RaggedMatrix {
                    row: i,
                    width: row.len(),
                    size,
                });
            }
            for (j, &t) in row.iter().enumerate() {
                tm.set(i, j, t);
            }
        }
        Ok(tm)
    }

    /// Returns the travel time from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel time from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, time: u64) {
        self.data[from * self.size + to] = time;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let tm = TimeMatrix::from_rows(&[vec![0, 10, 15], vec![10, 0, 35], vec![15, 35, 0]])
            .expect("square");
        assert_eq!(tm.size(), 3);
        assert_eq!(tm.get(0, 1), 10);
        assert_eq!(tm.get(2, 1), 35);
        assert_eq!(tm.get(1, 1), 0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = TimeMatrix::from_rows(&[vec![0, 10], vec![10]]).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedMatrix {
                row: 1,
                width: 1,
                size: 2
            }
        ));
    }

    #[test]
    fn test_from_data() {
        let tm = TimeMatrix::from_data(2, vec![0, 5, 7, 0]).expect("valid");
        assert_eq!(tm.get(0, 1), 5);
        assert_eq!(tm.get(1, 0), 7);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(TimeMatrix::from_data(2, vec![0, 1, 2]).is_err());
    }

    #[test]
    fn test_set_get() {
        let mut tm = TimeMatrix::new(3);
        tm.set(0, 1, 42);
        assert_eq!(tm.get(0, 1), 42);
        assert_eq!(tm.get(1, 0), 0);
    }

    #[test]
    fn test_symmetric() {
        let tm = TimeMatrix::from_rows(&[vec![0, 4], vec![4, 0]]).expect("square");
        assert!(tm.is_symmetric());
    }

    #[test]
    fn test_asymmetric() {
        let tm = TimeMatrix::from_rows(&[vec![0, 10], vec![15, 0]]).expect("square");
        assert!(!tm.is_symmetric());
    }
}
