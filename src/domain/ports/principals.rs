//! Principals port - owner/group resolution and ownership changes
//!
//! Kept behind a trait so the replacer can be exercised without superuser
//! rights and failures can be injected between writing and renaming.

use std::path::Path;

use crate::error::SysdeployResult;

/// Numeric owner and group of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    pub uid: u32,
    pub gid: u32,
}

pub trait Principals {
    /// Resolve textual owner and group names to numeric ids
    ///
    /// Fails with `SysdeployError::UnknownPrincipal` if either is unknown.
    fn resolve(&self, owner: &str, group: &str) -> SysdeployResult<Ownership>;

    /// Change the owner and group of `path`
    fn apply(&self, path: &Path, ownership: Ownership) -> SysdeployResult<()>;
}

impl<P: Principals + ?Sized> Principals for &P {
    fn resolve(&self, owner: &str, group: &str) -> SysdeployResult<Ownership> {
        (**self).resolve(owner, group)
    }

    fn apply(&self, path: &Path, ownership: Ownership) -> SysdeployResult<()> {
        (**self).apply(path, ownership)
    }
}
