//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                entry_count,
                backup_root,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "entry_count": entry_count,
                    "backup_root": backup_root.display().to_string(),
                    "dry_run": dry_run,
                })
            }

            DeployEvent::EntryStarted {
                index,
                source,
                destination,
            } => {
                serde_json::json!({
                    "event": "item_start",
                    "index": index,
                    "source": source.display().to_string(),
                    "destination": destination.display().to_string(),
                })
            }

            DeployEvent::EntryUnchanged { index, destination } => {
                serde_json::json!({
                    "event": "item_unchanged",
                    "index": index,
                    "destination": destination.display().to_string(),
                })
            }

            DeployEvent::EntryChanged {
                index,
                source,
                destination,
            } => {
                serde_json::json!({
                    "event": "item_changed",
                    "index": index,
                    "source": source.display().to_string(),
                    "destination": destination.display().to_string(),
                })
            }

            DeployEvent::CreateDirectory { index, path } => {
                serde_json::json!({
                    "event": "mkdir",
                    "index": index,
                    "path": path.display().to_string(),
                })
            }

            DeployEvent::BackupNotNeeded { index, destination } => {
                serde_json::json!({
                    "event": "backup_skipped",
                    "index": index,
                    "destination": destination.display().to_string(),
                })
            }

            DeployEvent::Backup {
                index,
                destination,
                backup,
            } => {
                serde_json::json!({
                    "event": "backup",
                    "index": index,
                    "destination": destination.display().to_string(),
                    "backup": backup.display().to_string(),
                })
            }

            DeployEvent::WriteTemp { index, temp } => {
                serde_json::json!({
                    "event": "write_temp",
                    "index": index,
                    "temp": temp.display().to_string(),
                })
            }

            DeployEvent::SetPermissions {
                index,
                temp,
                owner,
                group,
                mode,
            } => {
                serde_json::json!({
                    "event": "set_permissions",
                    "index": index,
                    "temp": temp.display().to_string(),
                    "owner": owner,
                    "group": group,
                    "mode": mode.to_string(),
                })
            }

            DeployEvent::Rename {
                index,
                temp,
                destination,
            } => {
                serde_json::json!({
                    "event": "rename",
                    "index": index,
                    "temp": temp.display().to_string(),
                    "destination": destination.display().to_string(),
                })
            }

            DeployEvent::EntryReplaced { index, destination } => {
                serde_json::json!({
                    "event": "item_replaced",
                    "index": index,
                    "destination": destination.display().to_string(),
                })
            }

            DeployEvent::EntryFailed {
                index,
                destination,
                error,
            } => {
                serde_json::json!({
                    "event": "item_error",
                    "index": index,
                    "destination": destination.display().to_string(),
                    "error": error,
                })
            }

            DeployEvent::ReloadStarted { command } => {
                serde_json::json!({ "event": "reload_start", "command": command })
            }

            DeployEvent::ReloadSkipped { reason } => {
                serde_json::json!({ "event": "reload_skipped", "reason": reason })
            }

            DeployEvent::ReloadCompleted { command } => {
                serde_json::json!({ "event": "reload_complete", "command": command })
            }

            DeployEvent::ReloadFailed { command, error } => {
                serde_json::json!({
                    "event": "reload_error",
                    "command": command,
                    "error": error,
                })
            }

            DeployEvent::Completed {
                changed_count,
                unchanged_count,
                changed_any,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "changed": changed_count,
                    "unchanged": unchanged_count,
                    "changed_any": changed_any,
                })
            }
        };

        self.write_event(json);
    }
}
