//! Structured logging with request context.

use std::time::Instant;

use tracing::Span;
use tracing_subscriber::EnvFilter;

use crate::RequestId;

const DEFAULT_FILTER: &str = "info";
const FORMAT_VAR: &str = "LOG_FORMAT";

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl LogFormat {
    /// Read the format from `LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::parse(std::env::var(FORMAT_VAR).ok().as_deref())
    }

    /// `human` selects the human-readable format; anything else is JSON.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("human") => Self::Human,
            _ => Self::Json,
        }
    }
}

/// Install the global `tracing` subscriber writing to stderr, which Spin captures.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Calling this more
/// than once is harmless.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.try_init(),
    };
}

/// Per-request logging context.
///
/// Owns the `request` span that carries the request id and route. Events
/// recorded inside the span inherit both fields.
#[derive(Debug, Clone)]
pub struct RequestLogger {
    request_id: RequestId,
    span: Span,
    start_time: Instant,
}

impl RequestLogger {
    /// Create the context for one request.
    pub fn new(request_id: RequestId, route: &str) -> Self {
        // ERROR level keeps the span enabled under any `RUST_LOG` filter.
        let span = tracing::error_span!("request", request_id = %request_id, route);
        Self {
            request_id,
            span,
            start_time: Instant::now(),
        }
    }

    /// The request span.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Get the request ID.
    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Microseconds since the context was created.
    pub fn elapsed_us(&self) -> u64 {
        u64::try_from(self.start_time.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}
