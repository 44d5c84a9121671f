use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown sort mode: {0}")]
    UnknownSortMode(String),
    #[error("invalid group table: {0}")]
    InvalidGroupTable(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
