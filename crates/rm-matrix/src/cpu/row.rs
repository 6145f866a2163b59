use std::fmt::Debug;

use crate::matrix::Matrix;

/// Computes one row of a matrix product.
///
/// A kernel receives row `row` of the left operand, the whole right operand,
/// and the output row it owns. It must write exactly `b.dim()` values into
/// `out` and touch nothing else.
pub trait RowKernel: Send + Sync + Debug {
    fn compute(&self, row: usize, a_row: &[i32], b: &Matrix, out: &mut [i32]);
}

/// Standard dot-product kernel: `out[c] = sum_k a_row[k] * b[k][c]`.
///
/// Multiplication and accumulation wrap on overflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotProductKernel;

impl RowKernel for DotProductKernel {
    fn compute(&self, _row: usize, a_row: &[i32], b: &Matrix, out: &mut [i32]) {
        let n = b.dim();
        debug_assert_eq!(a_row.len(), n);
        debug_assert_eq!(out.len(), n);

        for (c, slot) in out.iter_mut().enumerate() {
            let mut sum = 0i32;
            for (k, &a) in a_row.iter().enumerate() {
                sum = sum.wrapping_add(a.wrapping_mul(b.get(k, c)));
            }
            *slot = sum;
        }
    }
}
