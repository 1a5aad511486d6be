//! Logging configuration using tracing.
//!
//! Filter precedence: `RUST_LOG`, then `-v` flags, then the configured level
//! (`SYSDEPLOY_LOG` or `[log] level`), then `info`.

use is_terminal::IsTerminal;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Filter directive used when `RUST_LOG` is unset
pub fn directive(verbose: u8, configured: Option<&str>) -> String {
    match verbose {
        0 => configured
            .filter(|level| !level.trim().is_empty())
            .unwrap_or(DEFAULT_LEVEL)
            .to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize logging
///
/// Log lines go to stdout, or to stderr when stdout carries the JSON event
/// stream.
pub fn init(verbose: u8, configured: Option<&str>, to_stderr: bool) -> anyhow::Result<()> {
    let level = directive(verbose, configured);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let (writer, ansi) = if to_stderr {
        (
            BoxMakeWriter::new(std::io::stderr),
            std::io::stderr().is_terminal(),
        )
    } else {
        (
            BoxMakeWriter::new(std::io::stdout),
            std::io::stdout().is_terminal(),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
