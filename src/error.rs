//! Error types for sysdeploy
//!
//! Uses `thiserror` for library errors. Every failure mode the deployment
//! engine can hit is a distinct variant so the front door can pick an exit
//! code by matching on the kind.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sysdeploy operations
pub type SysdeployResult<T> = Result<T, SysdeployError>;

/// Which half of an `owner:group` pair failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalKind {
    User,
    Group,
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrincipalKind::User => write!(f, "owner user"),
            PrincipalKind::Group => write!(f, "group"),
        }
    }
}

/// Main error type for sysdeploy operations
#[derive(Error, Debug)]
pub enum SysdeployError {
    /// Malformed or incomplete manifest
    #[error("{message}")]
    Manifest { message: String },

    /// Declared source file exists in none of the candidate locations
    #[error("entry #{entry}: source not found (looked in {})", display_candidates(.candidates))]
    SourceNotFound {
        entry: usize,
        candidates: Vec<PathBuf>,
    },

    /// Mode string is not an octal permission value
    #[error("entry #{entry}: invalid mode {value:?} (expected octal digits like \"0644\")")]
    InvalidMode { entry: usize, value: String },

    /// Existing destination is a directory, device or dangling link
    #[error("destination exists but is not a regular file: {}", .path.display())]
    DestinationNotRegularFile { path: PathBuf },

    /// Owner or group name is not known to the host
    #[error("unknown {kind}: {name}")]
    UnknownPrincipal { kind: PrincipalKind, name: String },

    /// Reload command returned non-zero or could not be spawned
    #[error("{command} failed: {message}")]
    ReloadNotification { command: String, message: String },

    /// Mutation attempted without superuser authority
    #[error("superuser authority required (effective uid {euid}); run as root")]
    InsufficientAuthority { euid: u32 },

    /// Configuration file could not be parsed
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// IO error with the path it happened on
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SysdeployError {
    pub fn manifest(message: impl Into<String>) -> Self {
        SysdeployError::Manifest {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SysdeployError::Io {
            path: path.into(),
            source,
        }
    }
}

fn display_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Attach a path to a raw `std::io::Error`
pub(crate) trait IoResultExt<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> SysdeployResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> SysdeployResult<T> {
        self.map_err(|e| SysdeployError::io(path, e))
    }
}
