//! Tracing subscriber setup.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Filter used when neither the config nor `RUST_LOG` names one.
pub const DEFAULT_LOG_FILTER: &str = "gearforge=info";

static TRACING_INIT: Once = Once::new();

/// Install a compact `fmt` subscriber. `RUST_LOG` wins over `filter` when set.
/// Only the first call has any effect.
pub fn init_tracing(filter: &str) {
    let filter_str = if filter.trim().is_empty() {
        DEFAULT_LOG_FILTER.to_string()
    } else {
        filter.to_string()
    };
    TRACING_INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact();

        // Another subscriber may already be installed by the host.
        let _ = subscriber.try_init();
    });
}
