//! Cross-cutting request/response observation.
//!
//! Both adapters build a `CallRecord` around their dispatch step and hand it
//! to the shared `CallObserver`, which writes one log line per call and bumps
//! the transport counters. Observation never alters a request or response and
//! never fails a call.

use std::time::Duration;

use tracing::info;

use crate::utils::metrics::MetricsRegistry;

/// One observed call on either transport.
#[derive(Debug)]
pub struct CallRecord {
    /// "http" or "rpc"
    pub transport: &'static str,
    /// Route ("POST /accounts") or RPC method name.
    pub label: String,
    /// Compact form of the inbound payload.
    pub request: String,
    /// Compact form of the outbound payload or error text.
    pub response: String,
    /// Transport status: HTTP status code or JSON-RPC outcome.
    pub status: String,
    pub success: bool,
    pub elapsed: Duration,
}

/// Call observer shared by both adapters.
pub struct CallObserver {
    metrics: MetricsRegistry,
}

impl CallObserver {
    pub fn new() -> Self {
        Self {
            metrics: MetricsRegistry::new(),
        }
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Record one completed call.
    pub fn record(&self, call: CallRecord) {
        self.metrics
            .inc_counter(&format!("{}_requests_total", call.transport));
        if !call.success {
            self.metrics
                .inc_counter(&format!("{}_errors_total", call.transport));
        }

        info!(
            "[{}] {} | req: {} -> {} | resp: {} | {:?}",
            call.transport.to_uppercase(),
            call.label,
            call.request,
            call.status,
            call.response,
            call.elapsed,
        );
    }
}

impl Default for CallObserver {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact a payload for logging: single-line JSON when the bytes parse as
/// JSON, the raw trimmed text otherwise (plain-text error messages),
/// `<empty>` for empty bodies.
pub fn compact_json(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(v) => serde_json::to_string(&v).unwrap_or_else(|_| "<unserializable>".to_string()),
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compacts_valid_json_to_a_single_line() {
        let raw = b"{\n  \"name\": \"alice\",\n  \"email\": \"a@b.com\"\n}";
        assert_eq!(compact_json(raw), r#"{"name":"alice","email":"a@b.com"}"#);
    }

    #[test]
    fn empty_payload_becomes_placeholder() {
        assert_eq!(compact_json(b""), "<empty>");
        assert_eq!(compact_json(b"  \n "), "<empty>");
    }

    #[test]
    fn non_json_payload_is_passed_through_trimmed() {
        assert_eq!(compact_json(b" account not found \n"), "account not found");
    }

    #[test]
    fn recording_failures_bumps_the_error_counter() {
        let observer = CallObserver::new();
        observer.record(CallRecord {
            transport: "http",
            label: "GET /accounts/x".to_string(),
            request: "<empty>".to_string(),
            response: "account not found".to_string(),
            status: "404".to_string(),
            success: false,
            elapsed: Duration::from_millis(1),
        });
        let (counters, _) = observer.metrics().snapshot();
        assert_eq!(counters["http_requests_total"], 1);
        assert_eq!(counters["http_errors_total"], 1);
    }
}
