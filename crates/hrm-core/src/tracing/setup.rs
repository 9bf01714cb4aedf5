//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the HRM tracing/logging system.
///
/// Reads the `HRM_LOG` environment variable for per-subsystem log levels.
/// Format: `HRM_LOG=hrm_analysis=debug,hrm_core=warn`
///
/// Falls back to `hrm=info` if `HRM_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("HRM_LOG").unwrap_or_else(|_| EnvFilter::new("hrm=info"));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
