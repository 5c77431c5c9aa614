use crate::domain::entities::manifest::Manifest;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest store errors
#[derive(Debug, Error)]
pub enum ManifestStoreError {
    #[error("Manifest file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestStoreError {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path } | Self::Read { path, .. } => Some(path),
        }
    }
}

/// Loads the plain-text repository manifest from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct ManifestStore;

impl ManifestStore {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a manifest file
    pub async fn read_manifest(&self, path: &Path) -> Result<Manifest, ManifestStoreError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ManifestStoreError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ManifestStoreError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Ok(Manifest::parse(&content))
    }
}
