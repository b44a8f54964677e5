//! HTTP adapter: axum router, request/response logging middleware, server.

use std::sync::Arc;
use std::time::Instant;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tokio::sync::watch;
use tracing::info;

use crate::http::handlers::{self, AppState};
use crate::observe::{compact_json, CallObserver, CallRecord};
use crate::service::AccountService;

/// Build the accounts router with the logging middleware wrapped around the
/// whole handler chain. Unregistered methods on registered paths answer 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/accounts",
            post(handlers::create_account).get(handlers::list_accounts),
        )
        .route("/accounts/", get(handlers::missing_account_id))
        .route("/accounts/:id", get(handlers::get_account))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn_with_state(state.clone(), log_calls))
        .with_state(state)
}

/// Logging middleware: buffers both bodies, times the call, and reports it to
/// the shared observer. Request and response pass through byte-identical.
async fn log_calls(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let req_bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let label = format!("{} {}", parts.method, parts.uri.path());
    let request = compact_json(&req_bytes);
    let req = Request::from_parts(parts, Body::from(req_bytes));

    let started = Instant::now();
    let response = next.run(req).await;
    let elapsed = started.elapsed();

    let (parts, body) = response.into_parts();
    let resp_bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let status = parts.status;
    state.observer.record(CallRecord {
        transport: "http",
        label,
        request,
        response: compact_json(&resp_bytes),
        status: status.as_u16().to_string(),
        success: !status.is_client_error() && !status.is_server_error(),
        elapsed,
    });
    Response::from_parts(parts, Body::from(resp_bytes))
}

/// HTTP server for the accounts API.
pub struct HttpServer {
    addr: String,
    state: AppState,
}

impl HttpServer {
    pub fn new(addr: String, service: Arc<AccountService>, observer: Arc<CallObserver>) -> Self {
        Self {
            addr,
            state: AppState { service, observer },
        }
    }

    /// Bind and serve until the shutdown signal flips.
    pub async fn start(self, mut shutdown_rx: watch::Receiver<bool>) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("HTTP server listening on {}", listener.local_addr()?);

        let app = router(self.state);
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
            })
            .await?;
        Ok(())
    }
}
