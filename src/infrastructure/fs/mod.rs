//! File System Implementations
//!
//! The three mutation-side components of a deploy: comparing, backing up,
//! and atomically replacing. `LocalHostFiles` bundles them behind the
//! `HostFiles` port.

mod backup;
mod comparator;
mod local;
mod replacer;

pub use backup::BackupStore;
pub use comparator::{files_equal, hash_file};
pub use local::LocalHostFiles;
pub use replacer::{temp_path_for, AtomicReplacer, TEMP_SUFFIX};
