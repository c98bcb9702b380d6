//! Middleware for observability.
//!
//! Request logging with latency tracking; the audit trail covers every
//! request regardless of outcome.

pub mod logging;

pub use logging::request_logging;
