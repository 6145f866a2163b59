use std::fmt;

use crate::error::{MatrixError, Result};

/// A square matrix of `i32` values.
///
/// Holds contiguous, row-major data with a single dimension `dim` (the matrix
/// is `dim x dim`). Rows can be borrowed mutably and independently through
/// [`Matrix::rows_mut`], which is how workers receive exclusive ownership of
/// the row they write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i32>,
    dim: usize,
}

impl Matrix {
    /// Build a matrix from a literal array of rows.
    pub fn from_array<const N: usize>(rows: [[i32; N]; N]) -> Self {
        Matrix {
            data: rows.iter().flatten().copied().collect(),
            dim: N,
        }
    }

    /// Build a matrix from a slice of rows.
    ///
    /// # Errors
    /// Returns [`MatrixError::Empty`] if `rows` is empty, or
    /// [`MatrixError::NotSquare`] if any row length differs from the row count.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 {
            return Err(MatrixError::Empty);
        }

        let mut data = Vec::with_capacity(dim * dim);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dim {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: dim,
                    got: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Matrix { data, dim })
    }

    /// Create a zero-filled `dim x dim` matrix.
    pub fn zeros(dim: usize) -> Self {
        Matrix {
            data: vec![0; dim * dim],
            dim,
        }
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(
            row < self.dim && col < self.dim,
            "index ({row}, {col}) out of range for {0}x{0} matrix",
            self.dim
        );
        self.data[row * self.dim + col]
    }

    /// Returns row `r` as a slice.
    ///
    /// # Panics
    /// Panics if `r >= dim()`.
    pub fn row(&self, r: usize) -> &[i32] {
        let start = r * self.dim;
        &self.data[start..start + self.dim]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.data.chunks(self.dim.max(1))
    }

    /// Splits the matrix into disjoint mutable rows, in row order.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [i32]> {
        self.data.chunks_mut(self.dim.max(1))
    }

    /// Row-major view of all elements.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, "{}\t", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_array() {
        let m = Matrix::from_array([[1, 2], [3, 4]]);
        assert_eq!(m.dim(), 2);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(m.get(1, 0), 3);
        assert_eq!(m.row(1), &[3, 4]);
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        assert_eq!(m, Matrix::from_array([[1, 2, 3], [4, 5, 6], [7, 8, 9]]));
        assert_eq!(
            m.to_rows(),
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: [Vec<i32>; 0] = [];
        assert!(matches!(Matrix::from_rows(&rows), Err(MatrixError::Empty)));
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = Matrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::NotSquare {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_zeros() {
        let z = Matrix::zeros(3);
        assert_eq!(z.as_slice(), &[0; 9]);
        assert_eq!(z.rows().count(), 3);
    }

    #[test]
    fn test_rows_mut_are_disjoint() {
        let mut m = Matrix::zeros(2);
        for (r, row) in m.rows_mut().enumerate() {
            row.fill(r as i32 + 1);
        }
        assert_eq!(m.to_rows(), vec![vec![1, 1], vec![2, 2]]);
    }

    #[test]
    fn test_single_element() {
        let m = Matrix::from_array([[7]]);
        assert_eq!(m.dim(), 1);
        assert_eq!(m.rows().count(), 1);
        assert_eq!(m.get(0, 0), 7);
    }

    #[test]
    fn test_display_trailing_tabs() {
        let m = Matrix::from_array([[1, -2], [30, 4]]);
        assert_eq!(m.to_string(), "1\t-2\t\n30\t4\t\n");
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let m = Matrix::zeros(2);
        let _ = m.get(2, 0);
    }
}
