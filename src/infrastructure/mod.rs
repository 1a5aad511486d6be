//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `manifest/` - YAML manifest loading and validation
//! - `fs/` - Comparator, backup store, atomic replacer
//! - `host/` - Authority check, user/group resolution, chown
//! - `process/` - External command runner and reload notifier
//! - `events/` - Deploy event sinks (log, NDJSON)

pub mod events;
pub mod fs;
pub mod host;
pub mod manifest;
pub mod process;

// Re-export for convenience
pub use events::{JsonEventSink, LogEventSink};
pub use fs::{files_equal, AtomicReplacer, BackupStore, LocalHostFiles};
pub use host::{current_authority, HostPrincipals};
pub use manifest::load_manifest;
pub use process::{CommandReloadNotifier, SystemCommandRunner};
