//! Tracing subscriber setup

use bodyline_core::{BodylineError, BodylineResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::StreamConfig;

/// Filter built from `env` (the `RUST_LOG` value, if set) or, when that is
/// missing or unparsable, from `default_filter`
pub fn filter(env: Option<&str>, default_filter: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter` (trace|debug|info|warn|error|off).
/// Fails with `BodylineError::Config` if a global subscriber is already set.
pub fn init(default_filter: &str, json: bool) -> BodylineResult<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let registry = tracing_subscriber::registry().with(filter(env.as_deref(), default_filter));

    let installed = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };
    installed.map_err(|err| BodylineError::Config(format!("tracing subscriber: {err}")))
}

pub fn init_from_config(config: &StreamConfig) -> BodylineResult<()> {
    init(&config.log_filter, config.json_logs)
}
