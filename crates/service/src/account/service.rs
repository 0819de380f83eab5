use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Account, Credentials, RegisterInput};
use super::repository::AccountRepository;
use crate::errors::ServiceError;

/// Account business service independent of web framework
pub struct AccountService<R: AccountRepository> {
    repo: Arc<R>,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Register a new account.
    ///
    /// Rules, checked in order with the first failure winning: username must
    /// not be the empty string (no trimming, so whitespace-only passes),
    /// password must be at least 4 characters, username must not already be
    /// taken. The duplicate pre-check is advisory; the store's UNIQUE
    /// constraint is the guarantee under concurrent registration.
    ///
    /// # Examples
    /// ```
    /// use service::account::{service::AccountService, repository::mock::MockAccountRepository};
    /// use service::account::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAccountRepository::default());
    /// let svc = AccountService::new(repo);
    /// let input = RegisterInput { username: "ed".into(), password: "pass".into() };
    /// let account = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(account.username, "ed");
    /// assert!(account.id > 0);
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<Account, ServiceError> {
        if input.username.is_empty() {
            return Err(ServiceError::Validation("username must not be empty".into()));
        }
        if input.password.chars().count() < 4 {
            return Err(ServiceError::Validation("password too short (>=4)".into()));
        }
        if let Some(existing) = self.repo.find_by_username(&input.username).await? {
            debug!("username taken: {}", existing.username);
            return Err(ServiceError::Conflict);
        }

        let account = self.repo.insert(&input.username, &input.password).await?;
        info!(account_id = account.id, username = %account.username, "account_registered");
        Ok(account)
    }

    /// Authenticate against stored credentials.
    ///
    /// Passwords are compared by exact plaintext equality (a known weakness,
    /// see DESIGN.md). Unknown username and wrong password are
    /// indistinguishable to the caller.
    ///
    /// # Examples
    /// ```
    /// use service::account::{service::AccountService, repository::mock::MockAccountRepository};
    /// use service::account::domain::{Credentials, RegisterInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAccountRepository::default());
    /// let svc = AccountService::new(repo);
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { username: "ed".into(), password: "pass".into() }));
    /// let account = tokio_test::block_on(svc.login(Credentials { username: "ed".into(), password: "pass".into() })).unwrap();
    /// assert_eq!(account.username, "ed");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: Credentials) -> Result<Account, ServiceError> {
        let account = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(ServiceError::Unauthorized)?;

        if account.password != input.password {
            return Err(ServiceError::Unauthorized);
        }

        info!(account_id = account.id, "login_succeeded");
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::repository::mock::MockAccountRepository;

    fn svc() -> AccountService<MockAccountRepository> {
        AccountService::new(Arc::new(MockAccountRepository::default()))
    }

    fn input(username: &str, password: &str) -> RegisterInput {
        RegisterInput { username: username.into(), password: password.into() }
    }

    #[tokio::test]
    async fn register_assigns_id() {
        let svc = svc();
        let account = svc.register(input("ed", "pass")).await.unwrap();
        assert_eq!(account.id, 1);
        assert_eq!(account.username, "ed");
        assert_eq!(account.password, "pass");
    }

    #[tokio::test]
    async fn register_rejects_empty_username() {
        let svc = svc();
        let err = svc.register(input("", "longenough")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn register_accepts_whitespace_only_username() {
        // No trimming is applied; a single space is a legal username.
        let svc = svc();
        let account = svc.register(input(" ", "pass")).await.unwrap();
        assert_eq!(account.username, " ");
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let svc = svc();
        for pw in ["", "a", "abc"] {
            let err = svc.register(input("ed", pw)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)), "password {pw:?}");
        }
        // Exactly 4 characters is the floor
        assert!(svc.register(input("ed", "abcd")).await.is_ok());
    }

    #[tokio::test]
    async fn register_rejects_duplicate_username_regardless_of_password() {
        let svc = svc();
        svc.register(input("ed", "pass")).await.unwrap();
        let err = svc.register(input("ed", "different")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict));
    }

    #[tokio::test]
    async fn register_username_match_is_case_sensitive() {
        let svc = svc();
        svc.register(input("ed", "pass")).await.unwrap();
        assert!(svc.register(input("Ed", "pass")).await.is_ok());
    }

    #[tokio::test]
    async fn login_succeeds_on_exact_match() {
        let svc = svc();
        let registered = svc.register(input("ed", "pass")).await.unwrap();
        let logged_in = svc
            .login(Credentials { username: "ed".into(), password: "pass".into() })
            .await
            .unwrap();
        assert_eq!(logged_in, registered);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let svc = svc();
        svc.register(input("ed", "pass")).await.unwrap();
        let err = svc
            .login(Credentials { username: "ed".into(), password: "wrong".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }

    #[tokio::test]
    async fn login_rejects_unknown_username() {
        let svc = svc();
        let err = svc
            .login(Credentials { username: "nobody".into(), password: "pass".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }
}
