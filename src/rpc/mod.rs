//! RPC adapter: typed JSON-RPC surface over the account service.
//!
//! - Typed methods via the jsonrpsee proc macro
//! - `rpc_methods` discovery endpoint
//! - Logging middleware applied uniformly to every call

pub mod handlers;
pub mod server;

pub use handlers::AccountRpc;
pub use server::RpcServer;
