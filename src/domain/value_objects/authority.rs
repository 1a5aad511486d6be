//! Authority of the running process to mutate host files

use crate::error::{SysdeployError, SysdeployResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    Superuser,
    Unprivileged { euid: u32 },
}

impl Authority {
    pub fn from_euid(euid: u32) -> Self {
        if euid == 0 {
            Authority::Superuser
        } else {
            Authority::Unprivileged { euid }
        }
    }

    /// `InsufficientAuthority` unless superuser
    pub fn require(self) -> SysdeployResult<()> {
        match self {
            Authority::Superuser => Ok(()),
            Authority::Unprivileged { euid } => Err(SysdeployError::InsufficientAuthority { euid }),
        }
    }
}
