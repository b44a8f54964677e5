//! Business logic for the accounts domain.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::state::{Account, AccountStore};
use crate::utils::errors::Result;

/// Input for creating an account.
///
/// Shape validation (non-empty fields) is the adapters' responsibility; the
/// service only builds and stores the record.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    pub name: String,
    pub email: String,
}

/// Transport-agnostic service layer between the adapters and the store.
/// Holds no state of its own beyond a handle to the store.
pub struct AccountService {
    store: Arc<AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self { store }
    }

    /// Create a new account with a random id and the current UTC time.
    /// Ids are UUID v4, so concurrent creates on either transport cannot
    /// collide in practice.
    pub fn create_account(&self, input: CreateAccountInput) -> Result<Account> {
        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            created_at: Utc::now(),
        };
        self.store.create(account)
    }

    /// Fetch an account by id. NotFound propagates unchanged.
    pub fn get_account(&self, id: &str) -> Result<Account> {
        self.store.get(id)
    }

    /// All accounts.
    pub fn list_accounts(&self) -> Result<Vec<Account>> {
        self.store.list()
    }
}
