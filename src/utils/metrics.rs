use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Metrics registry (simple, Prometheus-style counters and gauges).
///
/// Constructed once at startup and handed to the call observer; the HTTP
/// adapter renders a snapshot at `GET /metrics`.
#[derive(Clone)]
pub struct MetricsRegistry {
    counters: Arc<Mutex<HashMap<String, u64>>>,
    gauges: Arc<Mutex<HashMap<String, f64>>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self {
            counters: Arc::new(Mutex::new(HashMap::new())),
            gauges: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn inc_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap();
        *counters.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn set_gauge(&self, name: &str, val: f64) {
        let mut gauges = self.gauges.lock().unwrap();
        gauges.insert(name.to_string(), val);
    }

    pub fn snapshot(&self) -> (HashMap<String, u64>, HashMap<String, f64>) {
        (
            self.counters.lock().unwrap().clone(),
            self.gauges.lock().unwrap().clone(),
        )
    }

    /// Render the registry as plain text, one `name value` line per entry.
    /// Keys are sorted for stable output.
    pub fn render(&self) -> String {
        let (counters, gauges) = self.snapshot();
        let mut out = String::from("# accountd metrics\n");

        let mut keys: Vec<&String> = counters.keys().collect();
        keys.sort();
        for k in keys {
            out.push_str(&format!("{} {}\n", k, counters[k]));
        }

        let mut keys: Vec<&String> = gauges.keys().collect();
        keys.sort();
        for k in keys {
            out.push_str(&format!("{} {}\n", k, gauges[k]));
        }

        out
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
