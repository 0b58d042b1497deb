use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: anything written to stdout or stderr would
/// corrupt the TUI. Set `SMARTVAS_LOG` to a file path to enable it, and
/// `RUST_LOG` to adjust the filter.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("SMARTVAS_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
