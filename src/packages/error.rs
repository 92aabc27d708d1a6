use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("Composer manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("Invalid Composer manifest at {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
