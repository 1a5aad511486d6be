//! YAML Manifest Loader
//!
//! Two phases: the manifest text is parsed into a generic
//! `serde_yaml_ng::Value` tree whose shape is checked item by item, then
//! each item's scalar text is projected into a `FileEntry` with every field
//! checked. A malformed document never yields a partially valid entry.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use crate::domain::entities::FileEntry;
use crate::domain::value_objects::{DestinationPath, FileMode};
use crate::error::{IoResultExt, SysdeployError, SysdeployResult};

/// Keys every manifest item must carry, in the order they are checked
pub const REQUIRED_KEYS: [&str; 5] = ["src", "dst", "mode", "owner", "group"];

/// Load and validate the manifest at `manifest_path`
///
/// Relative `src` values are looked up next to the manifest first, then
/// under `repo_root`.
pub fn load_manifest(manifest_path: &Path, repo_root: &Path) -> SysdeployResult<Vec<FileEntry>> {
    if !manifest_path.is_file() {
        return Err(SysdeployError::manifest(format!(
            "manifest not found: {}",
            manifest_path.display()
        )));
    }

    let content = std::fs::read_to_string(manifest_path).at_path(manifest_path)?;
    let manifest_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    let entries = parse_manifest(&content, manifest_dir, repo_root).map_err(|e| match e {
        SysdeployError::Manifest { message } if message.starts_with("invalid YAML") => {
            SysdeployError::manifest(format!("{}: {}", manifest_path.display(), message))
        }
        other => other,
    })?;

    debug!(
        manifest = %manifest_path.display(),
        entries = entries.len(),
        "manifest loaded"
    );
    Ok(entries)
}

/// Parse manifest text, resolving sources against the given directories
pub fn parse_manifest(
    content: &str,
    manifest_dir: &Path,
    repo_root: &Path,
) -> SysdeployResult<Vec<FileEntry>> {
    let document: Value = serde_yaml_ng::from_str(content)
        .map_err(|e| SysdeployError::manifest(format!("invalid YAML: {}", e)))?;

    let items = document
        .as_mapping()
        .and_then(|root| root.get("files"))
        .and_then(Value::as_sequence)
        .ok_or_else(|| {
            SysdeployError::manifest("manifest must contain top-level key: files: [ ... ]")
        })?;

    for (i, item) in items.iter().enumerate() {
        check_shape(i + 1, item)?;
    }

    // Every item is now a mapping of scalars, so the typed pass only reads
    // back each scalar as written. Unquoted `0644` stays "0644" and `0o644`
    // stays "0o644" instead of becoming the integer 420.
    let raw: RawManifest = serde_yaml_ng::from_str(content)
        .map_err(|e| SysdeployError::manifest(format!("invalid YAML: {}", e)))?;

    raw.files
        .into_iter()
        .enumerate()
        .map(|(i, item)| project_entry(i + 1, item, manifest_dir, repo_root))
        .collect()
}

#[derive(Deserialize)]
struct RawManifest {
    files: Vec<RawEntry>,
}

/// Field text of one manifest item
#[derive(Deserialize)]
struct RawEntry {
    src: String,
    dst: String,
    mode: String,
    owner: String,
    group: String,
}

/// Reject anything that is not a mapping carrying every required key as a
/// plain scalar
fn check_shape(index: usize, item: &Value) -> SysdeployResult<()> {
    let map = item
        .as_mapping()
        .ok_or_else(|| SysdeployError::manifest(format!("entry #{} is not a mapping", index)))?;

    for key in REQUIRED_KEYS {
        if !map.contains_key(key) {
            return Err(SysdeployError::manifest(format!(
                "entry #{} missing key: {}",
                index, key
            )));
        }
    }
    for key in REQUIRED_KEYS {
        if !is_scalar(map, key) {
            return Err(SysdeployError::manifest(format!(
                "entry #{} key {} must be a string",
                index, key
            )));
        }
    }
    Ok(())
}

fn is_scalar(map: &Mapping, key: &str) -> bool {
    matches!(
        map.get(key),
        Some(Value::String(_) | Value::Number(_) | Value::Bool(_))
    )
}

fn project_entry(
    index: usize,
    raw: RawEntry,
    manifest_dir: &Path,
    repo_root: &Path,
) -> SysdeployResult<FileEntry> {
    let source = resolve_source(index, Path::new(&raw.src), manifest_dir, repo_root)?;

    let destination = DestinationPath::new(&raw.dst).map_err(|e| {
        SysdeployError::manifest(format!("entry #{} dst {:?}: {}", index, raw.dst, e))
    })?;

    let mode: FileMode = raw.mode.parse().map_err(|_| SysdeployError::InvalidMode {
        entry: index,
        value: raw.mode.clone(),
    })?;

    Ok(FileEntry::new(source, destination, mode, raw.owner, raw.group))
}

fn resolve_source(
    index: usize,
    src: &Path,
    manifest_dir: &Path,
    repo_root: &Path,
) -> SysdeployResult<PathBuf> {
    let mut candidates = vec![manifest_dir.join(src), repo_root.join(src)];
    candidates.dedup();

    match candidates.iter().find(|c| c.exists()) {
        Some(found) => found.canonicalize().at_path(found),
        None => Err(SysdeployError::SourceNotFound {
            entry: index,
            candidates,
        }),
    }
}
