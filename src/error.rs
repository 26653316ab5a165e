use thiserror::Error;

#[derive(Error, Debug)]
pub enum TcsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown status: {0} (expected paid, pending, or overdue)")]
    UnknownStatus(String),

    #[error("Unknown expense file format: {0} (expected .csv or .json)")]
    UnknownFormat(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TcsError>;
