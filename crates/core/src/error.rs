use thiserror::Error;

/// Errors from the event source and subscriber store collaborators.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Parse(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
