//! Content Comparator
//!
//! Decides whether a destination already holds exactly the source bytes.
//! Sizes are compared first; only same-sized files are hashed.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::value_objects::ContentHash;
use crate::error::{IoResultExt, SysdeployError, SysdeployResult};

/// Compute the SHA-256 of a file, streaming it in fixed-size chunks
pub fn hash_file(path: &Path) -> SysdeployResult<ContentHash> {
    let file = File::open(path).at_path(path)?;
    ContentHash::from_reader(file).at_path(path)
}

/// `true` iff `destination` is a regular file with the same bytes as `source`
pub fn files_equal(source: &Path, destination: &Path) -> SysdeployResult<bool> {
    let dst_meta = match std::fs::metadata(destination) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(SysdeployError::io(destination, e)),
    };
    if !dst_meta.is_file() {
        return Ok(false);
    }

    let src_meta = std::fs::metadata(source).at_path(source)?;
    if src_meta.len() != dst_meta.len() {
        return Ok(false);
    }

    Ok(hash_file(source)? == hash_file(destination)?)
}
