use std::io;

use tracing::Level;

fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the stderr subscriber. Stdout stays reserved for command output.
/// Calling it again is a no-op.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Traces `e` with its source chain at debug level. Callers print the
/// user-facing message themselves.
pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    let mut line = format!("{}: {}", prefix, e);
    let mut source = e.source();
    while let Some(cause) = source {
        line.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    tracing::debug!("{}", line);
}
