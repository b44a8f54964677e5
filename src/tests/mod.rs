//! Test module for the account server.
//!
//! - HTTP surface (routes, status mapping, validation)
//! - RPC surface (typed methods, error codes, discovery)
//! - Cross-transport parity, concurrency, and lifecycle

mod rpc_api;
