//! Deploy Use Case
//!
//! Applies manifest entries strictly in order, failing fast:
//! 1. Check the source is still a regular file
//! 2. Compare source and destination; skip if identical
//! 3. Back up the existing destination
//! 4. Atomically replace the destination
//!
//! Entries applied before a failure stay applied. After the last entry the
//! reload notifier runs if requested.

use crate::domain::entities::{EntryOutcome, EntryState, FileEntry};
use crate::domain::ports::{DeployEvent, DeployEventSink, HostFiles, ReloadNotifier, StepContext};
use crate::error::{SysdeployError, SysdeployResult};

use super::context::DeploymentContext;
use super::result::{DeploySummary, ReloadOutcome};

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so tests can substitute host file operations
/// and the reload notifier.
pub struct DeployUseCase<F, N>
where
    F: HostFiles,
    N: ReloadNotifier,
{
    files: F,
    notifier: N,
}

impl<F, N> DeployUseCase<F, N>
where
    F: HostFiles,
    N: ReloadNotifier,
{
    pub fn new(files: F, notifier: N) -> Self {
        Self { files, notifier }
    }

    /// Apply `entries` to the host
    ///
    /// Returns `Err` for the first entry that fails. A failing reload does
    /// not; it is recorded in the summary instead.
    pub fn run(
        &self,
        entries: &[FileEntry],
        ctx: &DeploymentContext,
        events: &dyn DeployEventSink,
    ) -> SysdeployResult<DeploySummary> {
        if !ctx.dry_run() {
            ctx.authority().require()?;
        }

        events.on_event(DeployEvent::Started {
            entry_count: entries.len(),
            backup_root: ctx.backup_root().to_path_buf(),
            dry_run: ctx.dry_run(),
        });

        if !ctx.dry_run() {
            self.files.create_dir_all(ctx.backup_root())?;
        }

        let mut outcomes = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let index = i + 1;
            events.on_event(DeployEvent::EntryStarted {
                index,
                source: entry.source().to_path_buf(),
                destination: entry.destination().as_path().to_path_buf(),
            });

            let step = StepContext::new(index, ctx.dry_run(), events);
            match self.apply_entry(entry, ctx, step) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    events.on_event(DeployEvent::EntryFailed {
                        index,
                        destination: entry.destination().as_path().to_path_buf(),
                        error: e.to_string(),
                    });
                    return Err(e);
                }
            }
        }

        let reload = self.notify_reload(ctx, events);
        let summary = DeploySummary {
            outcomes,
            reload,
            dry_run: ctx.dry_run(),
        };

        events.on_event(DeployEvent::Completed {
            changed_count: summary.changed_count(),
            unchanged_count: summary.unchanged_count(),
            changed_any: summary.changed_any(),
        });
        Ok(summary)
    }

    fn apply_entry(
        &self,
        entry: &FileEntry,
        ctx: &DeploymentContext,
        step: StepContext<'_>,
    ) -> SysdeployResult<EntryOutcome> {
        let source = entry.source();
        if !self.files.is_regular_file(source) {
            return Err(SysdeployError::SourceNotFound {
                entry: step.index,
                candidates: vec![source.to_path_buf()],
            });
        }

        let destination = entry.destination();
        let mut outcome = EntryOutcome {
            index: step.index,
            destination: destination.as_path().to_path_buf(),
            state: EntryState::Unevaluated,
            backup: None,
        };

        if self.files.equal(source, destination.as_path())? {
            step.emit(DeployEvent::EntryUnchanged {
                index: step.index,
                destination: outcome.destination.clone(),
            });
            advance(&mut outcome, EntryState::Unchanged);
            return Ok(outcome);
        }

        step.emit(DeployEvent::EntryChanged {
            index: step.index,
            source: source.to_path_buf(),
            destination: outcome.destination.clone(),
        });
        advance(&mut outcome, EntryState::PendingBackup);
        outcome.backup = self
            .files
            .preserve(destination, ctx.backup_root(), step)?
            .map(|slot| slot.path().to_path_buf());
        advance(&mut outcome, EntryState::BackedUp);

        self.files.replace(entry, step)?;
        step.emit(DeployEvent::EntryReplaced {
            index: step.index,
            destination: outcome.destination.clone(),
        });
        advance(&mut outcome, EntryState::Replaced);

        Ok(outcome)
    }

    fn notify_reload(&self, ctx: &DeploymentContext, events: &dyn DeployEventSink) -> ReloadOutcome {
        if !ctx.reload_requested() {
            events.on_event(DeployEvent::ReloadSkipped {
                reason: "not requested".to_string(),
            });
            return ReloadOutcome::NotRequested;
        }

        let command = self.notifier.describe();
        if ctx.dry_run() {
            events.on_event(DeployEvent::ReloadSkipped {
                reason: format!("dry-run, would run: {}", command),
            });
            return ReloadOutcome::SkippedDryRun;
        }

        events.on_event(DeployEvent::ReloadStarted {
            command: command.clone(),
        });
        match self.notifier.notify() {
            Ok(()) => {
                events.on_event(DeployEvent::ReloadCompleted { command });
                ReloadOutcome::Completed
            }
            Err(e) => {
                let message = e.to_string();
                events.on_event(DeployEvent::ReloadFailed {
                    command,
                    error: message.clone(),
                });
                ReloadOutcome::Failed { message }
            }
        }
    }
}

fn advance(outcome: &mut EntryOutcome, next: EntryState) {
    debug_assert!(
        outcome.state.can_transition_to(next),
        "illegal transition {} -> {}",
        outcome.state,
        next
    );
    outcome.state = next;
}

