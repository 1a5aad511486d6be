//! Command Runner Port
//!
//! Runs an external program and hands back a typed outcome, so callers never
//! touch `std::process` directly and tests can substitute a fake.

/// Result of running an external command to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code, `None` if terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Short diagnostic for a failed command: trimmed stderr, else stdout,
    /// else the exit status
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

pub trait CommandRunner {
    /// Run `program` with `args`, waiting for it to exit
    ///
    /// `Err` only when the program could not be started.
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutcome>;
}
