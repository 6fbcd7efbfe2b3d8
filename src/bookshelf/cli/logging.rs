use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// rendered output. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bookshelf={}", level)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 3)
        .with_line_number(verbose >= 3)
        .try_init()
        .is_ok();

    if installed {
        debug!(verbose, "logging initialized");
    }
}
