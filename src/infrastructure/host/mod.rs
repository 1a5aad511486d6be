//! Host Adapters
//!
//! Everything that asks the operating system about users, groups and the
//! identity of the running process.

mod authority;
mod principals;

pub use authority::current_authority;
pub use principals::HostPrincipals;
