//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Resolving settings from flags, environment and config
//! - Wiring the deploy use case to host adapters and mapping the result to
//!   an exit code
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `exit` - Exit code taxonomy
//! - `runner` - Settings resolution and the end-to-end run

pub mod cli;
pub mod exit;
pub mod runner;

pub use cli::Cli;
pub use exit::ExitStatus;
pub use runner::{execute, resolve_settings, Settings};
