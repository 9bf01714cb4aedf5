//! Tracing initialization.

use hrm_core::tracing::init_tracing;

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!(target: "hrm_core", "tracing initialized twice without panicking");
}
