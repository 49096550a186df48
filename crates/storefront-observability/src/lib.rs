//! Observability for the storefront gateway.
//!
//! This crate provides:
//! - `RequestId` - Unique request identifier
//! - `RequestLogger` - The per-request `tracing` span and timer
//! - `init_tracing` - The single stderr subscriber, filtered by `RUST_LOG`

mod logging;
mod request_id;

pub use logging::*;
pub use request_id::*;
