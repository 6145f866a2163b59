use std::any::Any;
use std::thread;

use tracing::{debug, trace, warn};

use crate::backend::{check_operands, MultiplyBackend, Product};
use crate::cpu::row::{DotProductKernel, RowKernel};
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Settings for the worker threads spawned by [`ThreadPerRowBackend`].
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Worker threads are named `{thread_name_prefix}-{row}`.
    pub thread_name_prefix: String,
    /// Stack size for each worker. `None` uses the platform default.
    pub stack_size: Option<usize>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            thread_name_prefix: "row-worker".to_string(),
            stack_size: None,
        }
    }
}

/// Multiplies by spawning one scoped worker thread per output row.
///
/// Every worker gets a shared view of both operands and exclusive access to
/// the single result row it computes, so no locking is involved. All workers
/// are started before the first join. Each join is attempted independently:
/// a worker that fails to start or does not complete is logged and recorded in
/// [`Product::failures`], and its row is left as it was.
#[derive(Debug)]
pub struct ThreadPerRowBackend {
    config: WorkerConfig,
    kernel: Box<dyn RowKernel>,
}

impl ThreadPerRowBackend {
    pub fn new() -> Self {
        Self::with_config(WorkerConfig::default())
    }

    pub fn with_config(config: WorkerConfig) -> Self {
        Self {
            config,
            kernel: Box::new(DotProductKernel),
        }
    }

    /// Replace the row kernel. Returns self for builder-style usage.
    pub fn with_kernel(mut self, kernel: Box<dyn RowKernel>) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    fn builder(&self, row: usize) -> thread::Builder {
        let builder =
            thread::Builder::new().name(format!("{}-{}", self.config.thread_name_prefix, row));
        match self.config.stack_size {
            Some(size) => builder.stack_size(size),
            None => builder,
        }
    }
}

impl Default for ThreadPerRowBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplyBackend for ThreadPerRowBackend {
    fn name(&self) -> &str {
        "threaded"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Product> {
        let n = check_operands(a, b)?;
        let kernel: &dyn RowKernel = self.kernel.as_ref();

        let mut c = Matrix::zeros(n);
        let mut failures = Vec::new();

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(n);
            for (row, out) in c.rows_mut().enumerate() {
                let a_row = a.row(row);
                let spawned = self
                    .builder(row)
                    .spawn_scoped(scope, move || kernel.compute(row, a_row, b, out));
                match spawned {
                    Ok(handle) => handles.push((row, handle)),
                    Err(source) => {
                        let err = MatrixError::Spawn { row, source };
                        warn!(row, error = %err, "row worker could not be started");
                        failures.push(err);
                    }
                }
            }
            debug!(rows = n, started = handles.len(), "row workers started");

            for (row, handle) in handles {
                match handle.join() {
                    Ok(()) => trace!(row, "row worker finished"),
                    Err(payload) => {
                        let err = MatrixError::TaskWaitInterrupted {
                            row,
                            reason: panic_message(payload.as_ref()),
                        };
                        warn!(row, error = %err, "row worker did not complete");
                        failures.push(err);
                    }
                }
            }
        });

        debug!(rows = n, failed = failures.len(), "row workers joined");
        Ok(Product {
            matrix: c,
            failures,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}
