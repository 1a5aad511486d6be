//! sysdeploy CLI
//!
//! Usage: sysdeploy [--manifest PATH] [--dry-run] [--systemd-reload] ...

use clap::Parser;
use tracing::{error, warn};

use sysdeploy::domain::ports::{DeployEventSink, TeeEventSink};
use sysdeploy::infrastructure::{current_authority, JsonEventSink, LogEventSink};
use sysdeploy::logging;
use sysdeploy::presentation::{execute, resolve_settings, Cli, ExitStatus};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli).code());
}

fn run(cli: &Cli) -> ExitStatus {
    let (settings, warnings) = match resolve_settings(cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            init_logging(cli.verbose, None, cli.json);
            error!("{}", e);
            return ExitStatus::Usage;
        }
    };
    init_logging(cli.verbose, settings.log_level.as_deref(), settings.json);

    for w in &warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match &w.suggestion {
            Some(s) => warn!("{}: unknown config key '{}' (did you mean '{}'?)", location, w.key, s),
            None => warn!("{}: unknown config key '{}'", location, w.key),
        }
    }

    let sink: Box<dyn DeployEventSink> = if settings.json {
        Box::new(TeeEventSink::new(vec![
            Box::new(LogEventSink),
            Box::new(JsonEventSink::stdout()),
        ]))
    } else {
        Box::new(LogEventSink)
    };

    execute(&settings, current_authority(), sink.as_ref())
}

fn init_logging(verbose: u8, level: Option<&str>, json: bool) {
    if let Err(e) = logging::init(verbose, level, json) {
        eprintln!("warning: logging unavailable: {e:#}");
    }
}
