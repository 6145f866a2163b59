use std::fmt::Debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Trait for pluggable multiplication strategies (sequential, thread-per-row, etc.).
///
/// Operands are borrowed and the product is returned as an owned matrix. A
/// backend rejects mismatched operands up front; failures of individual rows
/// after computation has started are reported through [`Product::failures`]
/// instead of aborting the whole product.
pub trait MultiplyBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "sequential", "threaded").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] if `a` and `b` differ in size.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Product>;
}

/// Outcome of a multiplication.
#[derive(Debug)]
pub struct Product {
    /// The result matrix. Rows listed in `failures` may be stale (zero or
    /// partially written).
    pub matrix: Matrix,
    /// Per-row failures observed while computing `matrix`.
    pub failures: Vec<MatrixError>,
}

impl Product {
    pub fn complete(matrix: Matrix) -> Self {
        Product {
            matrix,
            failures: Vec::new(),
        }
    }

    /// True when every row was computed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Rows that did not finish, in ascending order.
    pub fn failed_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.failures.iter().filter_map(MatrixError::row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }
}

/// Checks that both operands have the same dimension.
pub(crate) fn check_operands(a: &Matrix, b: &Matrix) -> Result<usize> {
    if a.dim() != b.dim() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(a.dim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_operands() {
        let a = Matrix::zeros(3);
        assert_eq!(check_operands(&a, &Matrix::zeros(3)).unwrap(), 3);
        assert!(matches!(
            check_operands(&a, &Matrix::zeros(2)),
            Err(MatrixError::DimensionMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn test_failed_rows_sorted_and_deduped() {
        let product = Product {
            matrix: Matrix::zeros(3),
            failures: vec![
                MatrixError::TaskWaitInterrupted {
                    row: 2,
                    reason: "boom".to_string(),
                },
                MatrixError::TaskWaitInterrupted {
                    row: 0,
                    reason: "boom".to_string(),
                },
                MatrixError::TaskWaitInterrupted {
                    row: 2,
                    reason: "again".to_string(),
                },
            ],
        };
        assert!(!product.is_complete());
        assert_eq!(product.failed_rows(), vec![0, 2]);
    }

    #[test]
    fn test_complete_product() {
        let product = Product::complete(Matrix::zeros(1));
        assert!(product.is_complete());
        assert!(product.failed_rows().is_empty());
    }
}
