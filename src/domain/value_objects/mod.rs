//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod authority;
mod backup_slot;
mod file_mode;
mod hash;
mod path;

pub use authority::Authority;
pub use backup_slot::BackupSlot;
pub use file_mode::{FileMode, ModeError};
pub use hash::{ContentHash, HASH_CHUNK_SIZE};
pub use path::{DestinationPath, PathError};
