//! Deploy Module
//!
//! Orchestrates applying a manifest to the host.
//!
//! ## Structure
//!
//! - `context` - Run-wide inputs (`DeploymentContext`)
//! - `result` - Result types (`DeploySummary`, `ReloadOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use sysdeploy::application::deploy::{DeploymentContext, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(LocalHostFiles::new(HostPrincipals::new()), notifier);
//! let summary = use_case.run(&entries, &DeploymentContext::new(root, authority), &LogEventSink)?;
//! ```

mod context;
mod result;
mod use_case;

pub use context::DeploymentContext;
pub use result::{DeploySummary, ReloadOutcome};
pub use use_case::DeployUseCase;
