// Public modules
pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod parsing;
pub mod kubernetes;
pub mod metrics;
pub mod collector;
pub mod report;

// Re-export commonly used items
pub use types::*;
pub use error::{FetchError, ResolutionError};
pub use config::{load_config, load_config_with_env, Cli, EnvironmentProvider, SystemEnvironment, MockEnvironment};
pub use parsing::{parse_pod_phase, parse_condition_kind, parse_condition_status, snapshot_from_pod};
pub use logging::{init_tracing, log_filter_with_env};
pub use kubernetes::build_client;
pub use metrics::classify;
pub use collector::{KubePodSource, NamespaceOutcome, PodSource, SummaryCollector};
pub use report::{render_json, render_text, RunSummary};
