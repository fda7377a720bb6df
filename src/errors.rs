use thiserror::Error;

pub type Result<T> = std::result::Result<T, PickedError>;

#[derive(Error, Debug)]
pub enum PickedError {
    /// The object has been released; every accessor and stream
    /// acquisition fails with this permanently.
    #[error("Picked file has been disposed")]
    Disposed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Path error: {0}")]
    Path(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
