//! Tribes Observability Library
//!
//! Shared logging and request tracing for the tribes services:
//! - Tracing subscriber setup with JSON or pretty output
//! - Trace ID extraction from W3C `traceparent` and `x-trace-id` headers
//! - HTTP middleware for request/response logging and slow request detection

pub mod init;
pub mod middleware;
pub mod trace_context;

pub use init::*;
pub use middleware::*;
pub use trace_context::*;
