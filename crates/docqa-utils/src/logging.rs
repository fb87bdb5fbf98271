//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: status reporting from the docqa crates at `info`,
/// the HTTP stack underneath the inference provider quieted to `warn`
const DEFAULT_DIRECTIVES: &str = "info,hyper=warn,hyper_util=warn,reqwest=warn";

/// Initialize tracing subscriber with default configuration
///
/// `RUST_LOG` overrides the defaults when set.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_DIRECTIVES)
}
