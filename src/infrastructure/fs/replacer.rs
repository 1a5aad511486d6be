//! Atomic Replacer
//!
//! Writes new destination content through a temporary file in the same
//! directory, applies ownership and permission bits to it, then renames it
//! over the destination. Readers see either the old file or the complete
//! new one, never a partial write.

use std::fs::{self, File, OpenOptions, Permissions};
use std::io::ErrorKind;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::entities::FileEntry;
use crate::domain::ports::{DeployEvent, Principals, StepContext};
use crate::error::{IoResultExt, SysdeployError, SysdeployResult};

/// Suffix appended to the destination file name for the temporary file
pub const TEMP_SUFFIX: &str = ".tmp.deploy";

/// `/etc/hosts` -> `/etc/hosts.tmp.deploy`
pub fn temp_path_for(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(TEMP_SUFFIX);
    destination.with_file_name(name)
}

pub struct AtomicReplacer<P: Principals> {
    principals: P,
}

impl<P: Principals> AtomicReplacer<P> {
    pub fn new(principals: P) -> Self {
        Self { principals }
    }

    /// Put `entry.source()` in place at `entry.destination()`
    ///
    /// If this fails the destination is untouched; the temporary file is
    /// removed on a best-effort basis.
    pub fn replace(&self, entry: &FileEntry, step: StepContext<'_>) -> SysdeployResult<()> {
        let destination = entry.destination().as_path();
        let parent = destination.parent().unwrap_or_else(|| Path::new("/"));
        let temp = temp_path_for(destination);

        if !parent.is_dir() {
            step.emit(DeployEvent::CreateDirectory {
                index: step.index,
                path: parent.to_path_buf(),
            });
            if !step.dry_run {
                fs::create_dir_all(parent).at_path(parent)?;
            }
        }

        step.emit(DeployEvent::WriteTemp {
            index: step.index,
            temp: temp.clone(),
        });
        let guard = if step.dry_run {
            None
        } else {
            Some(write_temp(entry.source(), &temp)?)
        };

        let ownership = self.principals.resolve(entry.owner(), entry.group())?;

        step.emit(DeployEvent::SetPermissions {
            index: step.index,
            temp: temp.clone(),
            owner: entry.owner().to_string(),
            group: entry.group().to_string(),
            mode: entry.mode(),
        });
        if let Some(guard) = &guard {
            self.principals.apply(guard.path(), ownership)?;
            // After chown, which may clear set-id bits
            fs::set_permissions(guard.path(), Permissions::from_mode(entry.mode().bits()))
                .at_path(guard.path())?;
        }

        step.emit(DeployEvent::Rename {
            index: step.index,
            temp: temp.clone(),
            destination: destination.to_path_buf(),
        });
        let Some(guard) = guard else {
            return Ok(());
        };
        fs::rename(guard.path(), destination).at_path(destination)?;
        guard.disarm();

        if let Err(e) = File::open(parent).and_then(|d| d.sync_all()) {
            warn!(dir = %parent.display(), error = %e, "could not sync destination directory");
        }
        Ok(())
    }
}

/// Copy `source` into a fresh temporary file readable only by its owner
fn write_temp(source: &Path, temp: &Path) -> SysdeployResult<TempFileGuard> {
    // A leftover from an earlier failed attempt. Removing it (rather than
    // opening it) also drops any symlink planted at that name.
    match fs::symlink_metadata(temp) {
        Ok(meta) if meta.is_dir() => {
            return Err(SysdeployError::io(
                temp,
                std::io::Error::other("temporary path is occupied by a directory"),
            ))
        }
        Ok(_) => fs::remove_file(temp).at_path(temp)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(SysdeployError::io(temp, e)),
    }

    let mut reader = File::open(source).at_path(source)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(temp)
        .at_path(temp)?;
    let guard = TempFileGuard::new(temp);

    std::io::copy(&mut reader, &mut file).at_path(temp)?;
    file.sync_all().at_path(temp)?;
    Ok(guard)
}

/// Removes the temporary file when dropped unless disarmed
struct TempFileGuard {
    path: PathBuf,
    armed: bool,
}

impl TempFileGuard {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            armed: true,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                warn!(temp = %self.path.display(), error = %e, "could not remove temporary file");
            }
        }
    }
}
