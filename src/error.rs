use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriorityError {
    #[error("reports must be a JSON array, found {found}")]
    NotASequence { found: &'static str },

    #[error("report #{index} is malformed: {source}")]
    MalformedReport {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PriorityError>;
