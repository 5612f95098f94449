use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unusable, so the start notice and
/// the run summary always show
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `RUST_LOG`-style directives, falling back to [`DEFAULT_LOG_LEVEL`]
#[must_use]
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the fmt subscriber. Load `.env` before calling this so a
/// `RUST_LOG` set there is honoured.
pub fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();
}
