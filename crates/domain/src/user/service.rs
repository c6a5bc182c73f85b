//! User CRUD service.

use chrono::Utc;
use common::RecordId;
use record_store::RecordStore;

use super::{CreateUser, UpdateUser, User, UserError, validate_email};

/// Service for managing users.
pub struct UserService<S: RecordStore<User>> {
    store: S,
}

impl<S: RecordStore<User>> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a new user.
    #[tracing::instrument(skip(self))]
    pub async fn create_user(&self, cmd: CreateUser) -> Result<User, UserError> {
        validate_email(&cmd.email)?;

        let now = Utc::now();
        let user = self
            .store
            .insert(User {
                id: RecordId::generate(),
                name: cmd.name,
                email: cmd.email,
                created_at: now,
                updated_at: now,
            })
            .await?;

        metrics::counter!("users_created_total").increment(1);
        tracing::info!(user_id = %user.id, "created user");
        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, user_id: &RecordId) -> Result<User, UserError> {
        self.store
            .get(user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(user_id.clone()))
    }

    /// Lists users in registration order.
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.list().await?)
    }

    /// Overwrites the provided fields and refreshes `updated_at`.
    #[tracing::instrument(skip(self))]
    pub async fn update_user(&self, cmd: UpdateUser) -> Result<User, UserError> {
        if let Some(email) = &cmd.email {
            validate_email(email)?;
        }

        let UpdateUser {
            user_id,
            name,
            email,
        } = cmd;

        let user = self
            .store
            .update(&user_id, move |user: &mut User| {
                if let Some(name) = name {
                    user.name = name;
                }
                if let Some(email) = email {
                    user.email = email;
                }
                user.updated_at = Utc::now().max(user.updated_at);
                Ok::<_, UserError>(())
            })
            .await?
            .ok_or_else(|| UserError::NotFound(user_id.clone()))?;

        metrics::counter!("users_updated_total").increment(1);
        tracing::info!(user_id = %user.id, "updated user");
        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &RecordId) -> Result<(), UserError> {
        self.store
            .remove(user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(user_id.clone()))?;

        metrics::counter!("users_deleted_total").increment(1);
        tracing::info!(%user_id, "deleted user");
        Ok(())
    }

    pub async fn count_users(&self) -> Result<usize, UserError> {
        Ok(self.store.count().await?)
    }
}
