//! hrm-core: shared foundation for the HRM pattern statistics engine.
//!
//! Types, errors, layered configuration, tracing, the event-handler seam,
//! and constants. Everything algorithmic lives in `hrm-analysis`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
