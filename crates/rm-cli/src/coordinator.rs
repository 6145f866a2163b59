use std::io::Write;

use rm_matrix::{Matrix, MultiplyBackend, Product};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;

/// Left operand.
pub const LEFT: [[i32; 3]; 3] = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
/// Right operand.
pub const RIGHT: [[i32; 3]; 3] = [[7, 8, 9], [4, 5, 6], [1, 2, 3]];

/// Multiply the fixed operands with the configured backend and print the
/// result to `out`.
///
/// Row failures are logged and do not stop the run; the result is printed as
/// it stands, so a failed row shows its stale contents.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Product> {
    let backend = config.backend();
    let a = Matrix::from_array(LEFT);
    let b = Matrix::from_array(RIGHT);

    let product = multiply(backend.as_ref(), &a, &b)?;
    write_result(out, &product.matrix)?;
    Ok(product)
}

/// Run `backend` and log every row that did not complete.
pub fn multiply(backend: &dyn MultiplyBackend, a: &Matrix, b: &Matrix) -> Result<Product> {
    info!(backend = backend.name(), dim = a.dim(), "multiplying");
    let product = backend.multiply(a, b)?;
    for failure in &product.failures {
        warn!(error = %failure, "row left incomplete");
    }
    Ok(product)
}

/// Write the result block: a header line, then every row with each value
/// followed by a tab.
pub fn write_result<W: Write>(out: &mut W, matrix: &Matrix) -> Result<()> {
    writeln!(out, "Resultant Matrix:")?;
    write!(out, "{}", matrix)?;
    out.flush()?;
    Ok(())
}
