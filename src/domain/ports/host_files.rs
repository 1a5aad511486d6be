//! Host file port
//!
//! The file operations a deploy performs on the host: comparing content,
//! backing up a destination, and atomically replacing it.

use std::path::Path;

use crate::domain::entities::FileEntry;
use crate::domain::ports::StepContext;
use crate::domain::value_objects::{BackupSlot, DestinationPath};
use crate::error::SysdeployResult;

/// Abstract host file operations
///
/// Implementations:
/// - `LocalHostFiles` - the local file system with real ownership changes
pub trait HostFiles {
    /// `true` if `path` is a regular file (following symlinks)
    fn is_regular_file(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> SysdeployResult<()>;

    /// `true` iff `destination` already holds exactly the bytes of `source`
    fn equal(&self, source: &Path, destination: &Path) -> SysdeployResult<bool>;

    /// Copy an existing destination into its slot under `backup_root`
    fn preserve(
        &self,
        destination: &DestinationPath,
        backup_root: &Path,
        step: StepContext<'_>,
    ) -> SysdeployResult<Option<BackupSlot>>;

    /// Atomically put the entry's source content in place
    fn replace(&self, entry: &FileEntry, step: StepContext<'_>) -> SysdeployResult<()>;
}

impl<F: HostFiles + ?Sized> HostFiles for &F {
    fn is_regular_file(&self, path: &Path) -> bool {
        (**self).is_regular_file(path)
    }

    fn create_dir_all(&self, path: &Path) -> SysdeployResult<()> {
        (**self).create_dir_all(path)
    }

    fn equal(&self, source: &Path, destination: &Path) -> SysdeployResult<bool> {
        (**self).equal(source, destination)
    }

    fn preserve(
        &self,
        destination: &DestinationPath,
        backup_root: &Path,
        step: StepContext<'_>,
    ) -> SysdeployResult<Option<BackupSlot>> {
        (**self).preserve(destination, backup_root, step)
    }

    fn replace(&self, entry: &FileEntry, step: StepContext<'_>) -> SysdeployResult<()> {
        (**self).replace(entry, step)
    }
}
