use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Color(#[from] colorspec::ColorParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
