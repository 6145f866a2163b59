//! `row-matmul` - multiplies two fixed 3x3 integer matrices with one worker
//! thread per output row and prints the result.
//!
//! Takes no arguments. See [`config::Config`] for the environment variables it
//! reads. Logs go to standard error, filtered by `RUST_LOG` (default `warn`).

mod config;
mod coordinator;
mod error;

use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "row-matmul failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> error::Result<()> {
    let config = config::Config::from_env()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    coordinator::run(&config, &mut out)?;
    Ok(())
}
