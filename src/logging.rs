use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{EnvironmentProvider, SystemEnvironment};

/// `RUST_LOG` directives on top of an INFO default, so fetch warnings and the
/// run summary show without any configuration.
pub fn log_filter_with_env<E: EnvironmentProvider>(env: &E) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(env.get_var("RUST_LOG").unwrap_or_default())
}

/// Logs go to stderr; stdout carries only the report.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter_with_env(&SystemEnvironment))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
