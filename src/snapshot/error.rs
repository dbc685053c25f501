use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
