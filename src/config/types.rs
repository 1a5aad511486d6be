//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::process::DEFAULT_RELOAD_COMMAND;

/// Default manifest location, relative to the repo root
pub const DEFAULT_MANIFEST: &str = "deploy/manifest.yaml";

/// Default backup root, relative to the repo root
pub const DEFAULT_BACKUP_ROOT: &str = "backups";

/// Default config file name, looked up in the repo root
pub const CONFIG_FILE_NAME: &str = "sysdeploy.toml";

/// `[paths]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default)]
    pub manifest: Option<PathBuf>,

    #[serde(default)]
    pub backup_root: Option<PathBuf>,
}

/// `[reload]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReloadConfig {
    /// Program followed by its arguments
    #[serde(default = "default_reload_command")]
    pub command: Vec<String>,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            command: default_reload_command(),
        }
    }
}

fn default_reload_command() -> Vec<String> {
    DEFAULT_RELOAD_COMMAND.iter().map(|s| s.to_string()).collect()
}

/// `[log]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `info` or `sysdeploy=debug`
    #[serde(default)]
    pub level: Option<String>,
}

/// Contents of `sysdeploy.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub reload: ReloadConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Manifest path, relative entries resolved against `repo_root`
    pub fn manifest_path(&self, repo_root: &Path) -> PathBuf {
        let manifest = self
            .paths
            .manifest
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_MANIFEST));
        repo_root.join(manifest)
    }

    /// Backup root, relative entries resolved against `repo_root`
    pub fn backup_root(&self, repo_root: &Path) -> PathBuf {
        let root = self
            .paths
            .backup_root
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_BACKUP_ROOT));
        repo_root.join(root)
    }
}
