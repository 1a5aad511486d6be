//! Manifest loading

mod yaml;

pub use yaml::{load_manifest, parse_manifest, REQUIRED_KEYS};
