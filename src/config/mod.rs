//! Configuration module for sysdeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SYSDEPLOY_*)
//! 3. Config file (`<repo-root>/sysdeploy.toml` or `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{
    Config, LogConfig, PathsConfig, ReloadConfig, CONFIG_FILE_NAME, DEFAULT_BACKUP_ROOT,
    DEFAULT_MANIFEST,
};
