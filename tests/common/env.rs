//! Test environment builder for isolated sysdeploy testing.
//!
//! Destinations live under a temp directory standing in for `/`, and
//! entries are owned by the current user and group so ownership changes
//! succeed without root.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use nix::unistd::{getegid, geteuid, Group, User};
use tempfile::TempDir;

use sysdeploy::domain::ports::{DeployEvent, DeployEventSink};
use sysdeploy::domain::value_objects::{Authority, DestinationPath};
use sysdeploy::presentation::{execute, ExitStatus, Settings};

use super::fixtures::{manifest_yaml, ManifestItem};

/// Result of running the sysdeploy binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Test event sink that records all events
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<DeployEvent>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<DeployEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DeployEventSink for RecordingSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Names of the current effective user and group
pub fn current_principals() -> (String, String) {
    let user = User::from_uid(geteuid())
        .unwrap()
        .expect("current user has a passwd entry");
    let group = Group::from_gid(getegid())
        .unwrap()
        .expect("current group has a group entry");
    (user.name, group.name)
}

pub fn running_as_root() -> bool {
    geteuid().is_root()
}

/// Isolated test environment
pub struct TestEnv {
    /// Repository holding `deploy/manifest.yaml` and sources
    pub repo: TempDir,
    /// Stand-in for the host's `/`
    pub host: TempDir,
    pub user: String,
    pub group: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let repo = tempfile::tempdir().unwrap();
        let host = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(repo.path().join("deploy/files")).unwrap();
        let (user, group) = current_principals();
        Self {
            repo,
            host,
            user,
            group,
        }
    }

    pub fn repo_root(&self) -> &Path {
        self.repo.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.repo.path().join("deploy/manifest.yaml")
    }

    pub fn backup_root(&self) -> PathBuf {
        self.repo.path().join("backups")
    }

    /// Write a source under `deploy/files/`; returns the manifest-relative `src`
    pub fn write_source(&self, name: &str, content: &str) -> String {
        let path = self.repo.path().join("deploy/files").join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        format!("files/{}", name)
    }

    /// Destination path for something that would live at `/<rel>`
    pub fn dst(&self, rel: &str) -> PathBuf {
        self.host.path().join(rel)
    }

    pub fn write_dst(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dst(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Manifest item owned by the current user and group
    pub fn item(&self, src: &str, dst: &Path, mode: &str) -> ManifestItem {
        ManifestItem::new(src, &dst.to_string_lossy(), mode, &self.user, &self.group)
    }

    pub fn write_manifest(&self, items: &[ManifestItem]) {
        self.write_manifest_raw(&manifest_yaml(items));
    }

    pub fn write_manifest_raw(&self, yaml: &str) {
        std::fs::write(self.manifest_path(), yaml).unwrap();
    }

    pub fn backup_of(&self, dst: &Path) -> PathBuf {
        self.backup_root()
            .join(DestinationPath::new(dst).unwrap().relative_to_root())
    }

    pub fn settings(&self) -> Settings {
        Settings {
            repo_root: self.repo.path().to_path_buf(),
            manifest: self.manifest_path(),
            backup_root: self.backup_root(),
            dry_run: false,
            reload: false,
            reload_command: vec!["true".to_string()],
            json: false,
            log_level: None,
        }
    }

    /// Run in-process with superuser authority granted
    pub fn deploy(&self, settings: &Settings) -> (ExitStatus, Vec<DeployEvent>) {
        let sink = RecordingSink::default();
        let status = execute(settings, Authority::Superuser, &sink);
        (status, sink.events())
    }

    /// Run the binary from the repo root
    pub fn run_cli(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_sysdeploy"))
            .current_dir(self.repo.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("SYSDEPLOY_MANIFEST")
            .env_remove("SYSDEPLOY_BACKUP_ROOT")
            .env_remove("SYSDEPLOY_LOG")
            .output()
            .expect("Failed to execute sysdeploy");

        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
