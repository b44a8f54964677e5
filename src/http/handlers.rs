//! HTTP handlers for the accounts routes.
//! Routes:
//!
//!   POST /accounts        -> create account
//!   GET  /accounts/{id}   -> get account
//!   GET  /accounts        -> list accounts
//!   GET  /health          -> liveness probe
//!   GET  /metrics         -> counter snapshot

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::Deserialize;
use tracing::error;

use crate::observe::CallObserver;
use crate::service::{AccountService, CreateAccountInput};
use crate::utils::errors::AccountError;

/// Shared state handed to every handler: the service and the call observer.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AccountService>,
    pub observer: Arc<CallObserver>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    // Missing fields decode as empty strings and fail validation below.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// HTTP status mapping for the three error kinds. Messages are fixed per
/// kind; internal detail stays in the server log.
fn error_response(err: AccountError) -> Response {
    let (status, msg) = match err {
        AccountError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        AccountError::NotFound => (StatusCode::NOT_FOUND, "account not found".to_string()),
        AccountError::Internal(detail) => {
            error!("internal error: {detail}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    };
    (status, msg).into_response()
}

fn validation(msg: &str) -> Response {
    error_response(AccountError::Validation(msg.to_string()))
}

/// POST /accounts
pub async fn create_account(State(state): State<AppState>, body: Bytes) -> Response {
    let req: CreateAccountRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(_) => return validation("invalid request body"),
    };

    if req.name.is_empty() || req.email.is_empty() {
        return validation("name and email are required");
    }

    match state.service.create_account(CreateAccountInput {
        name: req.name,
        email: req.email,
    }) {
        Ok(account) => (StatusCode::CREATED, Json(account)).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /accounts/{id}
pub async fn get_account(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if id.is_empty() {
        return validation("missing account id");
    }
    match state.service.get_account(&id) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /accounts/ with no id segment.
pub async fn missing_account_id() -> Response {
    validation("missing account id")
}

/// GET /accounts
pub async fn list_accounts(State(state): State<AppState>) -> Response {
    match state.service.list_accounts() {
        Ok(accounts) => (StatusCode::OK, Json(accounts)).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> String {
    let stored = state
        .service
        .list_accounts()
        .map(|accounts| accounts.len())
        .unwrap_or(0);
    state
        .observer
        .metrics()
        .set_gauge("accounts_total", stored as f64);
    state.observer.metrics().render()
}
