use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("matrix must have at least one row")]
    Empty,
    #[error("matrix is not square: row {row} has {got} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("dimension mismatch: [{left}x{left}] @ [{right}x{right}]")]
    DimensionMismatch { left: usize, right: usize },
    #[error("failed to spawn worker for row {row}: {source}")]
    Spawn {
        row: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("wait on worker for row {row} was interrupted: {reason}")]
    TaskWaitInterrupted { row: usize, reason: String },
}

impl MatrixError {
    /// The output row a worker failure refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            MatrixError::Spawn { row, .. } | MatrixError::TaskWaitInterrupted { row, .. } => {
                Some(*row)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
