//! Superuser authority precondition

use nix::unistd::geteuid;

use crate::domain::value_objects::Authority;

/// Authority of the current process, from its effective uid
pub fn current_authority() -> Authority {
    Authority::from_euid(geteuid().as_raw())
}
