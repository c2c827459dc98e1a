//! Subscriber installation plus the per-stage log events in [`events`].

pub mod events;

use kbforge_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "KBFORGE_LOG";

/// JSON subscriber filtered by `KBFORGE_LOG`, `info` when unset.
pub fn init_tracing() -> bool {
    init_from_config(&ObservabilityConfig::default())
}

/// Install a subscriber from config; `KBFORGE_LOG` overrides `log_level`.
///
/// Returns false if a global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

/// JSON subscriber with an explicit filter directive, ignoring `KBFORGE_LOG`.
pub fn init_tracing_with_filter(directive: &str) -> bool {
    install(EnvFilter::new(directive), true)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
