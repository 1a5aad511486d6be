//! Deploy Result
//!
//! Result types for deploy operations.

use crate::domain::entities::EntryOutcome;

/// What happened to the reload notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    NotRequested,
    /// Requested, but this was a dry run
    SkippedDryRun,
    Completed,
    /// The notifier failed; file changes stay applied
    Failed { message: String },
}

/// Result of a deploy run that got through every entry
#[derive(Debug, Clone)]
pub struct DeploySummary {
    /// One outcome per manifest entry, in manifest order
    pub outcomes: Vec<EntryOutcome>,
    pub reload: ReloadOutcome,
    pub dry_run: bool,
}

impl DeploySummary {
    /// Whether any entry was replaced (or would be, in a dry run)
    pub fn changed_any(&self) -> bool {
        self.outcomes.iter().any(EntryOutcome::changed)
    }

    pub fn changed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.changed()).count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.outcomes.len() - self.changed_count()
    }
}
