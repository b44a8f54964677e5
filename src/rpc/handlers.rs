//! Typed JSON-RPC methods for the accounts domain.

use std::sync::Arc;

use jsonrpsee::core::{async_trait, RpcResult};
use jsonrpsee::proc_macros::rpc;
use jsonrpsee::types::{ErrorObject, ErrorObjectOwned};
use tracing::error;

use crate::service::{AccountService, CreateAccountInput};
use crate::state::Account;
use crate::utils::errors::AccountError;

/// JSON-RPC error codes owned by this adapter.
pub const INVALID_PARAMS: i32 = -32602;
pub const NOT_FOUND: i32 = -32001;
pub const INTERNAL: i32 = -32603;

#[rpc(server, client)]
pub trait AccountApi {
    /// Create an account from a name and email.
    #[method(name = "create_account")]
    async fn create_account(&self, name: String, email: String) -> RpcResult<Account>;

    /// Fetch an account by id.
    #[method(name = "get_account")]
    async fn get_account(&self, id: String) -> RpcResult<Account>;

    /// List every account.
    #[method(name = "list_accounts")]
    async fn list_accounts(&self) -> RpcResult<Vec<Account>>;
}

/// RPC status mapping for the three error kinds. Messages are fixed per
/// kind; internal detail stays in the server log.
fn rpc_error(err: AccountError) -> ErrorObjectOwned {
    match err {
        AccountError::Validation(msg) => ErrorObject::owned(INVALID_PARAMS, msg, None::<()>),
        AccountError::NotFound => ErrorObject::owned(NOT_FOUND, "account not found", None::<()>),
        AccountError::Internal(detail) => {
            error!("internal error: {detail}");
            ErrorObject::owned(INTERNAL, "internal error", None::<()>)
        }
    }
}

fn invalid_params(msg: &str) -> ErrorObjectOwned {
    rpc_error(AccountError::Validation(msg.to_string()))
}

/// Implements the typed RPC surface on top of the shared service.
pub struct AccountRpc {
    service: Arc<AccountService>,
}

impl AccountRpc {
    pub fn new(service: Arc<AccountService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AccountApiServer for AccountRpc {
    async fn create_account(&self, name: String, email: String) -> RpcResult<Account> {
        if name.is_empty() || email.is_empty() {
            return Err(invalid_params("name and email are required"));
        }
        self.service
            .create_account(CreateAccountInput { name, email })
            .map_err(rpc_error)
    }

    async fn get_account(&self, id: String) -> RpcResult<Account> {
        if id.is_empty() {
            return Err(invalid_params("id is required"));
        }
        self.service.get_account(&id).map_err(rpc_error)
    }

    async fn list_accounts(&self) -> RpcResult<Vec<Account>> {
        self.service.list_accounts().map_err(rpc_error)
    }
}
