use async_trait::async_trait;

use super::domain::Account;
use crate::errors::ServiceError;

/// Repository abstraction for account persistence.
///
/// `insert` relies on the store to assign the id and to enforce username
/// uniqueness at the constraint level; a violation surfaces as `Err`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, ServiceError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, ServiceError>;
    async fn insert(&self, username: &str, password: &str) -> Result<Account, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAccountRepository {
        accounts: Mutex<HashMap<i64, Account>>, // key: id
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Account>, ServiceError> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts.get(&id).cloned())
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<Account>, ServiceError> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts.values().find(|a| a.username == username).cloned())
        }

        async fn insert(&self, username: &str, password: &str) -> Result<Account, ServiceError> {
            let mut accounts = self.accounts.lock().unwrap();
            // Mirrors the UNIQUE constraint the real store enforces
            if accounts.values().any(|a| a.username == username) {
                return Err(ServiceError::Conflict);
            }
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let account = Account {
                id: *next,
                username: username.to_string(),
                password: password.to_string(),
            };
            accounts.insert(account.id, account.clone());
            Ok(account)
        }
    }
}
