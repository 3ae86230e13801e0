use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("No invoice line at index {0}")]
    RecordNotFound(usize),
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
