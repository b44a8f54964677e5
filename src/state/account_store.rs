//! In-memory account storage.
//! - Account record (id, name, email, created_at)
//! - AccountStore: HashMap keyed by id behind a reader/writer lock

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::utils::errors::{AccountError, Result};

/// A stored account record. `id` and `created_at` are assigned by the service
/// at creation and never change afterwards.
///
/// `created_at` serializes as an RFC 3339 string; both transports emit this
/// same representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory store for accounts, scoped to process lifetime.
///
/// A single reader/writer lock guards the map: `create` takes exclusive
/// access, `get` and `list` take shared access, so concurrent reads proceed
/// in parallel and serialize only against writers.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Save a record keyed by its id and return it.
    ///
    /// The service guarantees id uniqueness by construction; an existing
    /// entry under the same id is overwritten without a check.
    pub fn create(&self, account: Account) -> Result<Account> {
        self.accounts
            .write()
            .insert(account.id.clone(), account.clone());
        Ok(account)
    }

    /// Fetch a record by id.
    pub fn get(&self, id: &str) -> Result<Account> {
        self.accounts
            .read()
            .get(id)
            .cloned()
            .ok_or(AccountError::NotFound)
    }

    /// All stored records, in unspecified order.
    pub fn list(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.read().values().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            name: format!("user-{id}"),
            email: format!("{id}@example.com"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_then_get_returns_the_record() {
        let store = AccountStore::new();
        let created = store.create(account("a1")).unwrap();
        let fetched = store.get("a1").unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn get_missing_id_is_not_found() {
        let store = AccountStore::new();
        match store.get("missing") {
            Err(AccountError::NotFound) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn list_is_empty_for_a_fresh_store() {
        let store = AccountStore::new();
        assert!(store.list().unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn list_returns_every_record() {
        let store = AccountStore::new();
        for i in 0..5 {
            store.create(account(&format!("a{i}"))).unwrap();
        }
        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 5);
        let ids: HashSet<String> = listed.into_iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn listing_twice_without_writes_returns_the_same_set() {
        let store = AccountStore::new();
        for i in 0..4 {
            store.create(account(&format!("a{i}"))).unwrap();
        }
        let first: HashSet<String> = store.list().unwrap().into_iter().map(|a| a.id).collect();
        let second: HashSet<String> = store.list().unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_creates_are_all_stored() {
        let store = Arc::new(AccountStore::new());
        let handles: Vec<_> = (0..100)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    store.create(account(&format!("id-{i}"))).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 100);
        let ids: HashSet<String> = store.list().unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn interleaved_creates_and_lists_never_observe_a_torn_record() {
        let store = Arc::new(AccountStore::new());
        let mut handles = Vec::new();
        for i in 0..50 {
            let writer = store.clone();
            handles.push(thread::spawn(move || {
                writer.create(account(&format!("w-{i}"))).unwrap();
            }));
            let reader = store.clone();
            handles.push(thread::spawn(move || {
                for listed in reader.list().unwrap() {
                    assert!(!listed.id.is_empty());
                    assert!(!listed.name.is_empty());
                    assert!(!listed.email.is_empty());
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.list().unwrap().len(), 50);
    }
}
