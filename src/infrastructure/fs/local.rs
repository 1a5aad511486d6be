//! Local host files
//!
//! `HostFiles` over the local file system: the comparator, a backup store
//! rooted where the caller asks, and an atomic replacer.

use std::fs;
use std::path::Path;

use crate::domain::entities::FileEntry;
use crate::domain::ports::{HostFiles, Principals, StepContext};
use crate::domain::value_objects::{BackupSlot, DestinationPath};
use crate::error::{IoResultExt, SysdeployResult};

use super::backup::BackupStore;
use super::comparator::files_equal;
use super::replacer::AtomicReplacer;

pub struct LocalHostFiles<P: Principals> {
    replacer: AtomicReplacer<P>,
}

impl<P: Principals> LocalHostFiles<P> {
    pub fn new(principals: P) -> Self {
        Self {
            replacer: AtomicReplacer::new(principals),
        }
    }
}

impl<P: Principals> HostFiles for LocalHostFiles<P> {
    fn is_regular_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> SysdeployResult<()> {
        fs::create_dir_all(path).at_path(path)
    }

    fn equal(&self, source: &Path, destination: &Path) -> SysdeployResult<bool> {
        files_equal(source, destination)
    }

    fn preserve(
        &self,
        destination: &DestinationPath,
        backup_root: &Path,
        step: StepContext<'_>,
    ) -> SysdeployResult<Option<BackupSlot>> {
        BackupStore::new(backup_root).preserve(destination, step)
    }

    fn replace(&self, entry: &FileEntry, step: StepContext<'_>) -> SysdeployResult<()> {
        self.replacer.replace(entry, step)
    }
}
