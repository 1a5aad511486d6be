//! sysdeploy - manifest-driven host configuration deployer
//!
//! Copies declared source files to absolute destinations on the host,
//! enforcing owner, group and permission bits. Unchanged files are skipped,
//! existing files are backed up to a single overwrite-in-place slot before
//! being replaced, and every replacement is atomic.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeploySummary, DeployUseCase, DeploymentContext, ReloadOutcome};
pub use config::Config;
pub use domain::entities::FileEntry;
pub use domain::value_objects::{Authority, FileMode};
pub use error::{SysdeployError, SysdeployResult};
pub use infrastructure::manifest::{load_manifest, parse_manifest};
