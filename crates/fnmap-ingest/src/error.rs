use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("input file has no header row")]
    MissingHeader,
    #[error("required column not found: {0}")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
