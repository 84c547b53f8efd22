use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Trail map error: {0}")]
    Tree(#[from] crate::tree::TreeError),
    #[error("General error: {0}")]
    General(String),
}
