//! External Process Adapters

mod reload;
mod system;

pub use reload::{CommandReloadNotifier, DEFAULT_RELOAD_COMMAND};
pub use system::SystemCommandRunner;
