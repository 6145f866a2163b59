use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("matrix error: {0}")]
    Matrix(#[from] rm_matrix::MatrixError),
    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
