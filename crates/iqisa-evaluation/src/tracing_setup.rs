//! Tracing initialization.

use std::sync::Once;

use iqisa_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install a fmt subscriber filtered by `IQISA_LOG`
/// (e.g. `IQISA_LOG=iqisa_evaluation=debug`).
///
/// Falls back to `iqisa=info`. Calling it more than once is a no-op, as is
/// calling it when another global subscriber is already set.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("iqisa=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
