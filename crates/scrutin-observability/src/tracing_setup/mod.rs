//! Tracing setup: subscriber installation and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scrutin_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive. Wins over config.
pub const LOG_ENV_VAR: &str = "SCRUTIN_LOG";

/// Install the global subscriber. Idempotent; later calls are no-ops.
///
/// Filter: `SCRUTIN_LOG` if set and valid, else `config.log_level`, else `info`.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        // Logs go to stderr so stdout stays clean for command output.
        let result = if config.json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_current_span(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .with(filter)
                .try_init()
        };

        if let Err(e) = result {
            eprintln!("tracing subscriber already installed: {e}");
        }
    });
}
