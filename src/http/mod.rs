//! HTTP adapter: REST-style surface over the account service.

pub mod handlers;
pub mod server;

pub use handlers::AppState;
pub use server::{router, HttpServer};
