//! Backup Store
//!
//! Keeps one backup per destination under a fixed root, mirroring the
//! destination's absolute path. The copy is flushed to disk before
//! `preserve` returns so a crash during the following replace cannot lose
//! the original content.

use std::fs::{self, File, FileTimes};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::ports::{DeployEvent, StepContext};
use crate::domain::value_objects::{BackupSlot, DestinationPath};
use crate::error::{IoResultExt, SysdeployError, SysdeployResult};

#[derive(Debug, Clone)]
pub struct BackupStore {
    root: PathBuf,
}

impl BackupStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_for(&self, destination: &DestinationPath) -> BackupSlot {
        BackupSlot::for_destination(destination, &self.root)
    }

    /// Copy an existing destination into its backup slot
    ///
    /// Returns `None` when the destination does not exist. In a dry run the
    /// checks still happen and the slot is reported, but nothing is written.
    pub fn preserve(
        &self,
        destination: &DestinationPath,
        step: StepContext<'_>,
    ) -> SysdeployResult<Option<BackupSlot>> {
        let dst = destination.as_path();
        let meta = match fs::metadata(dst) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if fs::symlink_metadata(dst).is_ok() {
                    // Dangling symlink
                    return Err(SysdeployError::DestinationNotRegularFile {
                        path: dst.to_path_buf(),
                    });
                }
                step.emit(DeployEvent::BackupNotNeeded {
                    index: step.index,
                    destination: dst.to_path_buf(),
                });
                return Ok(None);
            }
            Err(e) => return Err(SysdeployError::io(dst, e)),
        };
        if !meta.is_file() {
            return Err(SysdeployError::DestinationNotRegularFile {
                path: dst.to_path_buf(),
            });
        }

        let slot = self.slot_for(destination);
        step.emit(DeployEvent::Backup {
            index: step.index,
            destination: dst.to_path_buf(),
            backup: slot.path().to_path_buf(),
        });
        if step.dry_run {
            return Ok(Some(slot));
        }

        let backup = slot.path();
        if let Some(parent) = backup.parent() {
            fs::create_dir_all(parent).at_path(parent)?;
        }
        clear_slot(backup)?;

        // fs::copy carries the permission bits over; timestamps are set below.
        fs::copy(dst, backup).at_path(backup)?;
        let copy = File::open(backup).at_path(backup)?;
        let mut times = FileTimes::new();
        if let Ok(accessed) = meta.accessed() {
            times = times.set_accessed(accessed);
        }
        if let Ok(modified) = meta.modified() {
            times = times.set_modified(modified);
        }
        copy.set_times(times).at_path(backup)?;
        copy.sync_all().at_path(backup)?;

        if let Some(parent) = backup.parent() {
            if let Err(e) = File::open(parent).and_then(|d| d.sync_all()) {
                warn!(dir = %parent.display(), error = %e, "could not sync backup directory");
            }
        }

        Ok(Some(slot))
    }
}

/// Remove the previous backup in a slot, if any
fn clear_slot(backup: &Path) -> SysdeployResult<()> {
    match fs::symlink_metadata(backup) {
        Ok(meta) if meta.is_dir() => Err(SysdeployError::io(
            backup,
            std::io::Error::other("backup slot is occupied by a directory"),
        )),
        Ok(_) => fs::remove_file(backup).at_path(backup),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SysdeployError::io(backup, e)),
    }
}
