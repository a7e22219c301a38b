//! HTTP middleware for request processing.
//!
//! Provides panic recovery and request tracing.

pub mod recovery;
pub mod tracing;
