//! End-to-end run
//!
//! Resolves settings, checks authority, loads the manifest, applies it and
//! turns the result into an `ExitStatus`. Every failure is logged as one
//! line before returning.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::application::deploy::{DeployUseCase, DeploymentContext, ReloadOutcome};
use crate::config::{self, ConfigWarning, CONFIG_FILE_NAME};
use crate::domain::ports::DeployEventSink;
use crate::domain::value_objects::Authority;
use crate::error::{SysdeployError, SysdeployResult};
use crate::infrastructure::fs::LocalHostFiles;
use crate::infrastructure::host::HostPrincipals;
use crate::infrastructure::manifest::load_manifest;
use crate::infrastructure::process::{CommandReloadNotifier, SystemCommandRunner};

use super::cli::Cli;
use super::exit::ExitStatus;

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub repo_root: PathBuf,
    pub manifest: PathBuf,
    pub backup_root: PathBuf,
    pub dry_run: bool,
    pub reload: bool,
    pub reload_command: Vec<String>,
    pub json: bool,
    pub log_level: Option<String>,
}

/// Merge CLI flags over environment over config file over defaults
pub fn resolve_settings(cli: &Cli) -> SysdeployResult<(Settings, Vec<ConfigWarning>)> {
    let cwd = std::env::current_dir().map_err(|e| SysdeployError::io(".", e))?;
    let repo_root = absolute(&cwd, cli.repo_root.as_deref().unwrap_or(Path::new(".")));
    let repo_root = repo_root.canonicalize().unwrap_or(repo_root);

    let (config_path, explicit) = match &cli.config {
        Some(path) => (absolute(&cwd, path), true),
        None => (repo_root.join(CONFIG_FILE_NAME), false),
    };
    let (file_config, warnings) = config::load_or_default(&config_path, explicit)?;
    let config = config::with_env_overrides(file_config);

    let manifest = match &cli.manifest {
        Some(path) => repo_root.join(path),
        None => config.manifest_path(&repo_root),
    };
    let backup_root = match &cli.backup_root {
        Some(path) => repo_root.join(path),
        None => config.backup_root(&repo_root),
    };

    let settings = Settings {
        repo_root,
        manifest,
        backup_root,
        dry_run: cli.dry_run,
        reload: cli.reload,
        reload_command: config.reload.command,
        json: cli.json,
        log_level: config.log.level,
    };
    Ok((settings, warnings))
}

fn absolute(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Run a deploy with host principals and the configured reload command
pub fn execute(
    settings: &Settings,
    authority: Authority,
    events: &dyn DeployEventSink,
) -> ExitStatus {
    info!("Repo root:      {}", settings.repo_root.display());
    info!("Manifest:       {}", settings.manifest.display());
    info!(
        "Backups root:   {}  (1-level, overwrite)",
        settings.backup_root.display()
    );
    info!("Dry-run:        {}", settings.dry_run);
    info!("Reload:         {}", settings.reload);

    if !settings.dry_run {
        if let Err(e) = authority.require() {
            error!("{}", e);
            return ExitStatus::NotRoot;
        }
    }

    let entries = match load_manifest(&settings.manifest, &settings.repo_root) {
        Ok(entries) => entries,
        Err(e) => {
            error!("manifest invalid: {}", e);
            return ExitStatus::ManifestInvalid;
        }
    };

    let notifier = CommandReloadNotifier::new(SystemCommandRunner, settings.reload_command.clone());
    let use_case = DeployUseCase::new(LocalHostFiles::new(HostPrincipals::new()), notifier);
    let ctx = DeploymentContext::new(&settings.backup_root, authority)
        .with_dry_run(settings.dry_run)
        .with_reload(settings.reload);

    let summary = match use_case.run(&entries, &ctx, events) {
        Ok(summary) => summary,
        Err(e) => {
            error!("deploy failed: {}", e);
            return ExitStatus::for_deploy_error(&e);
        }
    };

    if let ReloadOutcome::Failed { message } = &summary.reload {
        error!("reload failed: {}", message);
        return ExitStatus::ReloadFailed;
    }
    ExitStatus::Success
}
