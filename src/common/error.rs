use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole operation before or outside of per-entry work.
///
/// Per-entry failures (a single `git clone` exiting non-zero, for example) are
/// never represented here; they are recorded in the operation report instead.
#[derive(Error, Debug)]
pub enum AnvilError {
    #[error("{} not found", .path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("{} directory not found", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("{message}")]
    ManifestError {
        message: String,
        file_path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AnvilError {
    pub fn manifest_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ManifestNotFound { path: path.into() }
    }

    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    pub fn manifest_error_with_source(
        message: impl Into<String>,
        file_path: Option<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ManifestError {
            message: message.into(),
            file_path,
            source: Some(Box::new(source)),
        }
    }

    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    /// The error followed by its chain of sources, joined with `: `.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        message
    }

    /// Whether this error is a missing-precondition failure rather than an
    /// unexpected one.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::ManifestNotFound { .. } | Self::RootNotFound { .. }
        )
    }
}

impl From<std::io::Error> for AnvilError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

impl From<crate::infrastructure::filesystem::ManifestStoreError> for AnvilError {
    fn from(error: crate::infrastructure::filesystem::ManifestStoreError) -> Self {
        let path = error.path().map(|p| p.to_path_buf());
        Self::manifest_error_with_source("Failed to read manifest", path, error)
    }
}
