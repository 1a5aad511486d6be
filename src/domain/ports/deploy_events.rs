//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Every significant action is announced before it is attempted, so in a
//! dry run the event stream is the complete description of what would
//! happen.

use std::path::PathBuf;

use crate::domain::value_objects::FileMode;

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        entry_count: usize,
        backup_root: PathBuf,
        dry_run: bool,
    },

    /// Entry evaluation started
    EntryStarted {
        index: usize,
        source: PathBuf,
        destination: PathBuf,
    },

    /// Destination already matches source
    EntryUnchanged { index: usize, destination: PathBuf },

    /// Destination differs from source or is absent; it will be replaced
    EntryChanged {
        index: usize,
        source: PathBuf,
        destination: PathBuf,
    },

    /// Parent directory of a destination is about to be created
    CreateDirectory { index: usize, path: PathBuf },

    /// Destination did not exist, nothing to back up
    BackupNotNeeded { index: usize, destination: PathBuf },

    /// Existing destination about to be copied into its backup slot
    Backup {
        index: usize,
        destination: PathBuf,
        backup: PathBuf,
    },

    /// New content about to be written to the temporary file
    WriteTemp { index: usize, temp: PathBuf },

    /// Ownership and permission bits about to be applied to the temporary file
    SetPermissions {
        index: usize,
        temp: PathBuf,
        owner: String,
        group: String,
        mode: FileMode,
    },

    /// Temporary file about to be renamed onto the destination
    Rename {
        index: usize,
        temp: PathBuf,
        destination: PathBuf,
    },

    /// Destination now holds the new content
    EntryReplaced { index: usize, destination: PathBuf },

    /// Entry failed; the run stops here
    EntryFailed {
        index: usize,
        destination: PathBuf,
        error: String,
    },

    /// Reload notification about to run
    ReloadStarted { command: String },

    /// Reload notification not run
    ReloadSkipped { reason: String },

    /// Reload notification succeeded
    ReloadCompleted { command: String },

    /// Reload notification failed
    ReloadFailed { command: String, error: String },

    /// Deploy completed
    Completed {
        changed_count: usize,
        unchanged_count: usize,
        changed_any: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `LogEventSink`: human-readable log lines via `tracing`
/// - `JsonEventSink`: NDJSON event stream for automation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// Fans one event out to several sinks
pub struct TeeEventSink {
    sinks: Vec<Box<dyn DeployEventSink>>,
}

impl TeeEventSink {
    pub fn new(sinks: Vec<Box<dyn DeployEventSink>>) -> Self {
        Self { sinks }
    }
}

impl DeployEventSink for TeeEventSink {
    fn on_event(&self, event: DeployEvent) {
        for sink in &self.sinks {
            sink.on_event(event.clone());
        }
    }
}

/// What a single backup/replace step needs to know about its surroundings
#[derive(Clone, Copy)]
pub struct StepContext<'a> {
    /// 1-based manifest position of the entry being applied
    pub index: usize,
    pub dry_run: bool,
    pub events: &'a dyn DeployEventSink,
}

impl<'a> StepContext<'a> {
    pub fn new(index: usize, dry_run: bool, events: &'a dyn DeployEventSink) -> Self {
        Self {
            index,
            dry_run,
            events,
        }
    }

    pub fn emit(&self, event: DeployEvent) {
        self.events.on_event(event);
    }
}
