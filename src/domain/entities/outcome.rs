//! Entry State and Outcome
//!
//! Per-entry state machine:
//!
//! ```text
//! Unevaluated ─┬─> Unchanged
//!              └─> PendingBackup ─> BackedUp ─> Replaced
//! ```
//!
//! Backup always precedes replacement, even when there is nothing to back up.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Unevaluated,
    Unchanged,
    PendingBackup,
    BackedUp,
    Replaced,
}

impl EntryState {
    pub fn is_terminal(self) -> bool {
        matches!(self, EntryState::Unchanged | EntryState::Replaced)
    }

    /// Whether `self -> next` is an edge of the state machine
    pub fn can_transition_to(self, next: EntryState) -> bool {
        use EntryState::*;
        matches!(
            (self, next),
            (Unevaluated, Unchanged)
                | (Unevaluated, PendingBackup)
                | (PendingBackup, BackedUp)
                | (BackedUp, Replaced)
        )
    }
}

impl fmt::Display for EntryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryState::Unevaluated => "unevaluated",
            EntryState::Unchanged => "unchanged",
            EntryState::PendingBackup => "pending-backup",
            EntryState::BackedUp => "backed-up",
            EntryState::Replaced => "replaced",
        };
        f.write_str(name)
    }
}

/// Final result for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    /// 1-based position in the manifest
    pub index: usize,
    pub destination: PathBuf,
    pub state: EntryState,
    /// Backup slot written (or that would be written in a dry run)
    pub backup: Option<PathBuf>,
}

impl EntryOutcome {
    pub fn changed(&self) -> bool {
        self.state == EntryState::Replaced
    }
}
