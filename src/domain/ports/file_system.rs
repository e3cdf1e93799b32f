//! FileSystem port - abstraction over the writes the generator performs
//!
//! Lets the generate use case run against local disk or an in-memory mock.

use std::path::{Path, PathBuf};

use crate::error::ComposeError;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Parent directory missing
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
}

impl FsError {
    /// Attach the path an `io::Error` happened on
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }

    fn kind(&self) -> std::io::ErrorKind {
        match self {
            FsError::NotFound(_) => std::io::ErrorKind::NotFound,
            FsError::PermissionDenied(_) => std::io::ErrorKind::PermissionDenied,
            FsError::Io(_, err) => err.kind(),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "No such file or directory: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "{}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for FsError {}

impl From<FsError> for ComposeError {
    fn from(err: FsError) -> Self {
        let kind = err.kind();
        ComposeError::Io(std::io::Error::new(kind, err.to_string()))
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFs` (tests) - in-memory
pub trait FileSystem {
    /// Write content to file atomically
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Add the owner execute bit, keeping the other permission bits
    fn set_executable(&self, path: &Path) -> FsResult<()>;
}
