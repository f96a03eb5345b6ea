//! Customer accounts.
//!
//! Users are read straight from the store. Every write clears the admin
//! views, since user counts, gender ratio and age groups are computed from
//! them.

use std::sync::Arc;

use storefront_core::cache::InvalidationDescriptor;
use storefront_core::catalog::{build_user, NewUserRequest, User};
use storefront_core::storage::{RepositoryError, UserRepository};

use crate::error::Result;
use crate::invalidation::InvalidationRouter;

/// Outcome of a sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUp {
    /// A new account was stored.
    Created(User),
    /// The id was already registered; nothing was written.
    Returning(User),
}

impl SignUp {
    pub fn user(&self) -> &User {
        match self {
            SignUp::Created(user) | SignUp::Returning(user) => user,
        }
    }

    pub fn into_user(self) -> User {
        match self {
            SignUp::Created(user) | SignUp::Returning(user) => user,
        }
    }
}

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    router: InvalidationRouter,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, router: InvalidationRouter) -> Self {
        Self { users, router }
    }

    /// Registers a user, or hands back the stored account when the id is
    /// already known. Field checks only apply to new accounts.
    pub async fn new_user(&self, request: NewUserRequest) -> Result<SignUp> {
        if let Some(id) = request.id.as_deref().filter(|id| !id.trim().is_empty()) {
            if let Some(user) = self.users.get_user(id).await? {
                tracing::info!(user_id = %user.id, "Welcome back");
                return Ok(SignUp::Returning(user));
            }
        }

        let user = build_user(request)?;
        self.users.create_user(&user).await?;
        self.invalidate_admin().await;

        tracing::info!(user_id = %user.id, "User created");
        Ok(SignUp::Created(user))
    }

    pub async fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.list_users().await?)
    }

    pub async fn user(&self, id: &str) -> Result<User> {
        self.users
            .get_user(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("User", id).into())
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.users.delete_user(id).await?;
        self.invalidate_admin().await;

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    async fn invalidate_admin(&self) {
        self.router
            .invalidate(&InvalidationDescriptor::new().admin())
            .await;
    }
}
