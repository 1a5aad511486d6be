//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Applies manifest entries (compare, back up, replace)
//!   and triggers the optional reload

pub mod deploy;

pub use deploy::{DeploySummary, DeployUseCase, DeploymentContext, ReloadOutcome};
