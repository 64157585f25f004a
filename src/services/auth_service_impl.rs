//! `SeaORM` implementation of the `AuthService` trait.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::db::Store;
use crate::models::user::User;
use crate::services::auth_service::{AuthError, AuthService};
use crate::services::password::PasswordHasher;

pub struct SeaOrmAuthService {
    store: Store,
    hasher: PasswordHasher,
    min_password_length: usize,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, hasher: PasswordHasher, min_password_length: usize) -> Self {
        Self {
            store,
            hasher,
            min_password_length,
        }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if password.chars().count() < self.min_password_length.max(1) {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters",
                self.min_password_length.max(1)
            )));
        }

        if self.store.user_exists(username).await? {
            return Err(AuthError::Conflict);
        }

        let password_hash = self.hasher.hash_blocking(password).await?;

        // A concurrent registration can still win the race; the unique index decides.
        let user = self
            .store
            .create_user(username, &password_hash)
            .await?
            .ok_or(AuthError::Conflict)?;

        info!("Registered user: {}", user.username);
        Ok(user)
    }

    async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let Some((user, password_hash)) = self.store.get_user_with_password(username).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify_blocking(password, &password_hash).await? {
            warn!("Failed login for user: {username}");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, AuthError> {
        Ok(self.store.get_user(id).await?)
    }
}
