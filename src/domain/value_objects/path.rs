//! Destination Path Value Object
//!
//! A validated absolute destination path:
//! - Absolute (leading `/`)
//! - No traversal components (`..`)
//! - Names a file (not `/` itself)

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when destination validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path is empty
    Empty,
    /// Path is relative
    NotAbsolute,
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path has no final file name component
    NoFileName,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "path is empty"),
            PathError::NotAbsolute => write!(f, "path must be absolute"),
            PathError::ContainsTraversal => {
                write!(f, "path contains traversal components (..)")
            }
            PathError::NoFileName => write!(f, "path does not name a file"),
        }
    }
}

impl std::error::Error for PathError {}

/// A validated absolute destination path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationPath(PathBuf);

impl DestinationPath {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }
        if !path.is_absolute() {
            return Err(PathError::NotAbsolute);
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(PathError::ContainsTraversal);
        }
        if path.file_name().is_none() {
            return Err(PathError::NoFileName);
        }

        Ok(Self(path.to_path_buf()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The path with its root stripped, e.g. `/etc/hosts` -> `etc/hosts`
    pub fn relative_to_root(&self) -> PathBuf {
        self.0
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect()
    }
}

impl AsRef<Path> for DestinationPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for DestinationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
