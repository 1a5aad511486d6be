//! Reload notifier that runs a single external command

use crate::domain::ports::{CommandRunner, ReloadNotifier};
use crate::error::{SysdeployError, SysdeployResult};

pub const DEFAULT_RELOAD_COMMAND: [&str; 2] = ["systemctl", "daemon-reload"];

pub struct CommandReloadNotifier<R: CommandRunner> {
    runner: R,
    command: Vec<String>,
}

impl<R: CommandRunner> CommandReloadNotifier<R> {
    /// Notifier running `systemctl daemon-reload`
    pub fn systemd(runner: R) -> Self {
        Self::new(
            runner,
            DEFAULT_RELOAD_COMMAND.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// An empty `command` falls back to the systemd default
    pub fn new(runner: R, command: Vec<String>) -> Self {
        if command.is_empty() {
            return Self::systemd(runner);
        }
        Self { runner, command }
    }
}

impl<R: CommandRunner> ReloadNotifier for CommandReloadNotifier<R> {
    fn describe(&self) -> String {
        self.command.join(" ")
    }

    fn notify(&self) -> SysdeployResult<()> {
        let Some((program, args)) = self.command.split_first() else {
            return Ok(());
        };
        let failed = |message: String| SysdeployError::ReloadNotification {
            command: self.describe(),
            message,
        };

        let outcome = self.runner.run(program, args).map_err(|e| failed(e.to_string()))?;
        if outcome.success() {
            Ok(())
        } else {
            Err(failed(outcome.diagnostic()))
        }
    }
}
