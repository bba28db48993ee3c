use std::fmt;
use std::io;
use std::path::Path;

/// Why a file could not be served.
#[derive(Debug)]
pub enum AssetError {
    /// Nothing exists at the path
    Missing,
    /// The path exists but could not be opened or read
    Open(io::Error),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Missing => write!(f, "file is missing"),
            AssetError::Open(e) => write!(f, "failed to open file: {}", e),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Missing => None,
            AssetError::Open(e) => Some(e),
        }
    }
}

/// Reads a pinned file, distinguishing "not there" from "there but unreadable".
pub async fn read_asset(path: &Path) -> Result<Vec<u8>, AssetError> {
    match tokio::fs::try_exists(path).await {
        Ok(true) => read_file(path).await,
        Ok(false) => Err(AssetError::Missing),
        Err(e) => Err(AssetError::Open(e)),
    }
}

/// Reads a file already known to exist. Any failure, including the file
/// vanishing since it was found, counts as an open failure.
pub async fn read_file(path: &Path) -> Result<Vec<u8>, AssetError> {
    tokio::fs::read(path).await.map_err(AssetError::Open)
}
