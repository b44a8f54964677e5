//! Observability for the request pipeline: a single call-observer capability
//! invoked by both transport adapters around their dispatch step.

pub mod observer;

pub use observer::{compact_json, CallObserver, CallRecord};
