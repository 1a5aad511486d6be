#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Manifest parsing must reject bad input with an error, never panic
        let _ = sysdeploy::parse_manifest(
            content,
            Path::new("/nonexistent/deploy"),
            Path::new("/nonexistent"),
        );
    }
});
