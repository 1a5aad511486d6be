//! Deployment Context
//!
//! Everything a run needs to know about its surroundings, passed in
//! explicitly rather than read from process state.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Authority;

#[derive(Debug, Clone)]
pub struct DeploymentContext {
    backup_root: PathBuf,
    authority: Authority,
    dry_run: bool,
    reload_requested: bool,
}

impl DeploymentContext {
    pub fn new(backup_root: impl Into<PathBuf>, authority: Authority) -> Self {
        Self {
            backup_root: backup_root.into(),
            authority,
            dry_run: false,
            reload_requested: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_reload(mut self, reload_requested: bool) -> Self {
        self.reload_requested = reload_requested;
        self
    }

    pub fn backup_root(&self) -> &Path {
        &self.backup_root
    }

    pub fn authority(&self) -> Authority {
        self.authority
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn reload_requested(&self) -> bool {
        self.reload_requested
    }
}
