//! Process exit codes
//!
//! A closed set so calling automation can branch on the failure class.

use crate::error::SysdeployError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Invalid invocation or configuration
    Usage,
    NotRoot,
    ManifestInvalid,
    DeployFailed,
    ReloadFailed,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage => 2,
            ExitStatus::NotRoot => 3,
            ExitStatus::ManifestInvalid => 4,
            ExitStatus::DeployFailed => 5,
            ExitStatus::ReloadFailed => 6,
        }
    }

    /// Exit status for an error raised while applying entries
    pub fn for_deploy_error(err: &SysdeployError) -> Self {
        match err {
            SysdeployError::InsufficientAuthority { .. } => ExitStatus::NotRoot,
            SysdeployError::ReloadNotification { .. } => ExitStatus::ReloadFailed,
            _ => ExitStatus::DeployFailed,
        }
    }
}
