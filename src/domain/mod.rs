//! Domain Layer
//!
//! The deployment model without I/O.
//!
//! ## Structure
//!
//! - `entities/` - `FileEntry`, per-entry state machine and outcome
//! - `value_objects/` - `FileMode`, `DestinationPath`, `BackupSlot`, `ContentHash`
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or processes directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
