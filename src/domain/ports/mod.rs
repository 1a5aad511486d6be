//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod deploy_events;
pub mod host_files;
pub mod principals;
pub mod reload_notifier;

pub use command_runner::{CommandOutcome, CommandRunner};
pub use deploy_events::{DeployEvent, DeployEventSink, StepContext, TeeEventSink};
pub use host_files::HostFiles;
pub use principals::{Ownership, Principals};
pub use reload_notifier::ReloadNotifier;
