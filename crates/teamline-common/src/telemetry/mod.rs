//! Telemetry, tracing setup, and the tracing-backed audit sink

mod audit;
mod tracing_setup;

pub use audit::TracingAuditSink;
pub use tracing_setup::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
