//! Domain Entities
//!
//! Core business objects with identity.

mod file_entry;
mod outcome;

pub use file_entry::FileEntry;
pub use outcome::{EntryOutcome, EntryState};
