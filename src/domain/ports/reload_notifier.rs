//! Reload Notifier Port
//!
//! Asks the host's service manager to pick up changed unit definitions.

use crate::error::SysdeployResult;

pub trait ReloadNotifier {
    /// Human-readable description, e.g. `systemctl daemon-reload`
    fn describe(&self) -> String;

    /// Fails with `SysdeployError::ReloadNotification`
    fn notify(&self) -> SysdeployResult<()>;
}
