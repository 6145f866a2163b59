//! `rm-matrix` - Square integer matrices and row-parallel multiplication for row-matmul.
//!
//! This crate provides:
//! - A square, row-major `Matrix` of `i32` values
//! - A `RowKernel` trait computing a single output row, with the standard
//!   `DotProductKernel`
//! - A `MultiplyBackend` trait for pluggable multiplication strategies
//! - A reference `SequentialBackend` and the `ThreadPerRowBackend`, which
//!   fans out one worker thread per output row and joins them all

pub mod backend;
pub mod cpu;
pub mod error;
pub mod matrix;
pub mod threaded;

// Re-export primary types at the crate root for convenience.
pub use backend::{MultiplyBackend, Product};
pub use cpu::row::{DotProductKernel, RowKernel};
pub use cpu::SequentialBackend;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use threaded::{ThreadPerRowBackend, WorkerConfig};
