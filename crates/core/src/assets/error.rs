use thiserror::Error;

/// Errors reported by the asset host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),
    #[error("Delete failed for {public_id}: {reason}")]
    DeleteFailed { public_id: String, reason: String },
}

/// Result type for asset host operations.
pub type Result<T> = std::result::Result<T, AssetError>;
