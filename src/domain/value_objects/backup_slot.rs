//! Backup Slot Value Object
//!
//! Deterministic, timestamp-free location of the single backup kept for a
//! destination. A later backup of the same destination lands in the same
//! slot and replaces the earlier one; there is no history.

use std::path::{Path, PathBuf};

use super::DestinationPath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSlot {
    path: PathBuf,
}

impl BackupSlot {
    /// `/etc/wireguard/wg0.conf` under `backups/` -> `backups/etc/wireguard/wg0.conf`
    pub fn for_destination(destination: &DestinationPath, backup_root: &Path) -> Self {
        Self {
            path: backup_root.join(destination.relative_to_root()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
