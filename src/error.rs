// error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access storage file: {0}")]
    StorageFile(#[from] std::io::Error),

    #[error("could not decode stored value: {0}")]
    StorageMisformat(#[from] serde_json::Error),
}
