pub mod row;

use crate::backend::{check_operands, MultiplyBackend, Product};
use crate::error::Result;
use crate::matrix::Matrix;

use self::row::{DotProductKernel, RowKernel};

/// Single-threaded reference backend.
///
/// Computes every row in order on the calling thread with the
/// [`DotProductKernel`]. Serves as the correctness baseline for the
/// threaded backend.
#[derive(Debug, Clone, Default)]
pub struct SequentialBackend;

impl SequentialBackend {
    pub fn new() -> Self {
        SequentialBackend
    }
}

impl MultiplyBackend for SequentialBackend {
    fn name(&self) -> &str {
        "sequential"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Product> {
        let n = check_operands(a, b)?;

        let mut c = Matrix::zeros(n);
        for (i, out) in c.rows_mut().enumerate() {
            DotProductKernel.compute(i, a.row(i), b, out);
        }
        Ok(Product::complete(c))
    }
}
