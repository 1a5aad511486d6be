//! Log Event Sink
//!
//! Renders deploy events as operator-facing log lines. Steps are logged at
//! `info`; bookkeeping events at `debug`. Failures are also `debug` here:
//! the front door prints the one error line for a failed run.

use tracing::{debug, info};

use crate::domain::ports::{DeployEvent, DeployEventSink};

#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl DeployEventSink for LogEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                entry_count,
                backup_root,
                dry_run,
            } => {
                debug!(
                    entries = entry_count,
                    backup_root = %backup_root.display(),
                    dry_run,
                    "deploy started"
                );
            }
            DeployEvent::EntryStarted {
                index,
                source,
                destination,
            } => {
                debug!(index, source = %source.display(), destination = %destination.display(), "evaluating entry");
            }
            DeployEvent::EntryUnchanged { destination, .. } => {
                info!("==> UP-TO-DATE: {}", destination.display());
            }
            DeployEvent::EntryChanged {
                source,
                destination,
                ..
            } => {
                info!("==> DEPLOY: {} -> {}", source.display(), destination.display());
            }
            DeployEvent::CreateDirectory { path, .. } => {
                info!("  - mkdir -p {}", path.display());
            }
            DeployEvent::BackupNotNeeded { destination, .. } => {
                debug!(destination = %destination.display(), "no existing file, backup skipped");
            }
            DeployEvent::Backup {
                destination,
                backup,
                ..
            } => {
                info!("  - backup {} -> {}", destination.display(), backup.display());
            }
            DeployEvent::WriteTemp { temp, .. } => {
                info!("  - write temp {}", temp.display());
            }
            DeployEvent::SetPermissions {
                owner, group, mode, ..
            } => {
                info!("  - set owner/group {}:{}, mode {}", owner, group, mode);
            }
            DeployEvent::Rename {
                temp, destination, ..
            } => {
                info!("  - replace {} -> {}", temp.display(), destination.display());
            }
            DeployEvent::EntryReplaced { index, destination } => {
                debug!(index, destination = %destination.display(), "entry replaced");
            }
            DeployEvent::EntryFailed {
                index,
                destination,
                error,
            } => {
                debug!(index, destination = %destination.display(), %error, "entry failed");
            }
            DeployEvent::ReloadStarted { command } => {
                info!("==> RELOAD: {}", command);
            }
            DeployEvent::ReloadSkipped { reason } => {
                info!("==> RELOAD: skipped ({})", reason);
            }
            DeployEvent::ReloadCompleted { command } => {
                debug!(command = %command, "reload completed");
            }
            DeployEvent::ReloadFailed { command, error } => {
                debug!(%command, %error, "reload failed");
            }
            DeployEvent::Completed {
                changed_count,
                unchanged_count,
                changed_any,
            } => {
                info!("==> DONE");
                info!(
                    changed = changed_count,
                    unchanged = unchanged_count,
                    "Changes applied: {}",
                    changed_any
                );
            }
        }
    }
}
