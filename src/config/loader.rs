//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoResultExt, SysdeployError, SysdeployResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SysdeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).at_path(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SysdeployError::Config {
        path: path.to_path_buf(),
        message: e.to_string().trim_end().to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|dotted| {
            let (section, key) = match dotted.rsplit_once('.') {
                Some((section, key)) => (Some(section), key),
                None => (None, dotted.as_str()),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: key_line(&content, key),
                suggestion: closest_known_key(section, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `path` if it exists, else defaults
///
/// A missing file is only an error when the caller named it explicitly.
pub fn load_or_default(
    path: &Path,
    explicit: bool,
) -> SysdeployResult<(Config, Vec<ConfigWarning>)> {
    if path.is_file() || explicit {
        return load_with_warnings(path).map_err(|e| match e {
            SysdeployError::Io { source, .. } => SysdeployError::Config {
                path: path.to_path_buf(),
                message: source.to_string(),
            },
            other => other,
        });
    }
    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (SYSDEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_overrides_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    // SYSDEPLOY_MANIFEST
    if let Some(manifest) = non_empty("SYSDEPLOY_MANIFEST") {
        config.paths.manifest = Some(PathBuf::from(manifest));
    }

    // SYSDEPLOY_BACKUP_ROOT
    if let Some(root) = non_empty("SYSDEPLOY_BACKUP_ROOT") {
        config.paths.backup_root = Some(PathBuf::from(root));
    }

    // SYSDEPLOY_LOG
    if let Some(level) = non_empty("SYSDEPLOY_LOG") {
        config.log.level = Some(level);
    }

    config
}

/// 1-based line on which `key` is assigned or opened as a table
fn key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            let assigned = line
                .split_once('=')
                .is_some_and(|(lhs, _)| lhs.trim() == key);
            assigned || line.trim_start_matches('[').starts_with(key)
        })
        .map(|i| i + 1)
}

/// Keys accepted inside each table, top level under `None`
fn known_keys(section: Option<&str>) -> &'static [&'static str] {
    match section {
        None => &["paths", "reload", "log"],
        Some("paths") => &["manifest", "backup_root"],
        Some("reload") => &["command"],
        Some("log") => &["level"],
        Some(_) => &[],
    }
}

/// Nearest known key within two edits, if any
fn closest_known_key(section: Option<&str>, unknown: &str) -> Option<String> {
    known_keys(section)
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
