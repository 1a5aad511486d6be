//! File Entry Entity
//!
//! One manifest line item: copy `source` to `destination` with the given
//! mode and ownership.

use std::path::Path;

use crate::domain::value_objects::{DestinationPath, FileMode};

/// A validated manifest entry
///
/// Immutable once constructed. Owner and group stay textual until apply
/// time so an unknown user is reported against the host, not the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    source: std::path::PathBuf,
    destination: DestinationPath,
    mode: FileMode,
    owner: String,
    group: String,
}

impl FileEntry {
    pub fn new(
        source: impl Into<std::path::PathBuf>,
        destination: DestinationPath,
        mode: FileMode,
        owner: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination,
            mode,
            owner: owner.into(),
            group: group.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &DestinationPath {
        &self.destination
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn group(&self) -> &str {
        &self.group
    }
}
