//! Trace context carried through a request.
//!
//! Supports the W3C `traceparent` header and plain `x-trace-id` / `x-request-id` headers.

use actix_web::{HttpMessage, HttpRequest};
use std::fmt;
use uuid::Uuid;

pub const TRACE_ID_HEADER: &str = "x-trace-id";
pub const SPAN_ID_HEADER: &str = "x-span-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const W3C_TRACEPARENT_HEADER: &str = "traceparent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// ID of the whole trace, shared with upstream callers
    pub trace_id: String,
    /// ID of the span opened for this request
    pub span_id: String,
    pub parent_span_id: Option<String>,
    pub request_id: String,
}

impl TraceContext {
    pub fn new() -> Self {
        let trace_id = Uuid::new_v4().simple().to_string();
        Self {
            request_id: trace_id.clone(),
            trace_id,
            span_id: generate_span_id(),
            parent_span_id: None,
        }
    }

    /// Extract trace context from HTTP request headers, minting fresh IDs where absent.
    pub fn from_request(req: &HttpRequest) -> Self {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|h| h.to_str().ok())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        if let Some(ctx) = header(W3C_TRACEPARENT_HEADER).and_then(|tp| Self::parse_traceparent(&tp)) {
            return ctx;
        }

        let trace_id = header(TRACE_ID_HEADER).unwrap_or_else(|| Uuid::new_v4().simple().to_string());
        let request_id = header(REQUEST_ID_HEADER).unwrap_or_else(|| trace_id.clone());

        Self {
            trace_id,
            span_id: generate_span_id(),
            parent_span_id: header(SPAN_ID_HEADER),
            request_id,
        }
    }

    /// Parse W3C traceparent header
    /// Format: version-trace_id-parent_id-flags (e.g. "00-xxx-yyy-01")
    fn parse_traceparent(value: &str) -> Option<Self> {
        let parts: Vec<&str> = value.split('-').collect();
        if parts.len() < 3 || parts[1].is_empty() || parts[2].is_empty() {
            return None;
        }

        let trace_id = parts[1].to_string();
        Some(Self {
            request_id: trace_id.clone(),
            trace_id,
            span_id: generate_span_id(),
            parent_span_id: Some(parts[2].to_string()),
        })
    }
}

impl Default for TraceContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trace_id={} span_id={}", self.trace_id, self.span_id)
    }
}

/// 16 hex characters
fn generate_span_id() -> String {
    Uuid::new_v4().simple().to_string()[..16].to_string()
}

/// Extension trait to extract TraceContext from actix-web requests
pub trait TraceContextExt {
    fn trace_context(&self) -> TraceContext;
}

impl TraceContextExt for HttpRequest {
    fn trace_context(&self) -> TraceContext {
        if let Some(ctx) = self.extensions().get::<TraceContext>() {
            return ctx.clone();
        }
        TraceContext::from_request(self)
    }
}
