//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

/// sysdeploy - apply a file manifest to this host
#[derive(Parser, Debug)]
#[command(name = "sysdeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Manifest YAML (relative to the repo root; default deploy/manifest.yaml)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Repository root holding sources and the default config
    #[arg(long, value_name = "PATH")]
    pub repo_root: Option<PathBuf>,

    /// Directory holding one backup per destination (default <repo-root>/backups)
    #[arg(long, value_name = "PATH")]
    pub backup_root: Option<PathBuf>,

    /// Config file (default <repo-root>/sysdeploy.toml, if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show actions, do not modify the system
    #[arg(long)]
    pub dry_run: bool,

    /// Run the reload command (systemctl daemon-reload) after deploying
    #[arg(long = "systemd-reload", visible_alias = "reload")]
    pub reload: bool,

    /// Emit NDJSON events on stdout; logs move to stderr
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
