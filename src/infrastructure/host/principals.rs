//! Principals backed by the host user and group databases

use std::path::Path;

use nix::unistd::{chown, Gid, Group, Uid, User};

use crate::domain::ports::{Ownership, Principals};
use crate::error::{PrincipalKind, SysdeployError, SysdeployResult};

/// Resolves names through NSS (`getpwnam`/`getgrnam`) and changes ownership
/// with `chown(2)`
#[derive(Debug, Default, Clone, Copy)]
pub struct HostPrincipals;

impl HostPrincipals {
    pub fn new() -> Self {
        Self
    }
}

fn unknown(kind: PrincipalKind, name: &str) -> SysdeployError {
    SysdeployError::UnknownPrincipal {
        kind,
        name: name.to_string(),
    }
}

impl Principals for HostPrincipals {
    fn resolve(&self, owner: &str, group: &str) -> SysdeployResult<Ownership> {
        // A lookup error (e.g. a broken NSS module) is reported the same way
        // as a missing name.
        let user = User::from_name(owner)
            .ok()
            .flatten()
            .ok_or_else(|| unknown(PrincipalKind::User, owner))?;
        let group_entry = Group::from_name(group)
            .ok()
            .flatten()
            .ok_or_else(|| unknown(PrincipalKind::Group, group))?;

        Ok(Ownership {
            uid: user.uid.as_raw(),
            gid: group_entry.gid.as_raw(),
        })
    }

    fn apply(&self, path: &Path, ownership: Ownership) -> SysdeployResult<()> {
        chown(
            path,
            Some(Uid::from_raw(ownership.uid)),
            Some(Gid::from_raw(ownership.gid)),
        )
        .map_err(|errno| SysdeployError::io(path, std::io::Error::from(errno)))
    }
}
