use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid row: {0}")]
    InvalidRow(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
