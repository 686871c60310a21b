//! Profile repository - user accounts and profile data.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::Profile;
use crate::errors::{AppError, AppResult};

use super::entities::profile;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Profile store contract.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by user id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>>;

    /// Find profile by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Profile>>;

    /// Create a profile for a registering user
    async fn create(
        &self,
        email: String,
        password_hash: String,
        full_name: Option<String>,
    ) -> AppResult<Profile>;

    /// Update profile fields
    async fn update(
        &self,
        id: Uuid,
        full_name: Option<String>,
        avatar_url: Option<String>,
    ) -> AppResult<Profile>;
}

/// SeaORM-backed profile store
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>> {
        let model = profile::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Profile::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Profile>> {
        let model = profile::Entity::find()
            .filter(profile::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(Profile::from))
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        full_name: Option<String>,
    ) -> AppResult<Profile> {
        let now = Utc::now();
        let active_model = profile::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            full_name: Set(full_name),
            avatar_url: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Profile::from(model))
    }

    async fn update(
        &self,
        id: Uuid,
        full_name: Option<String>,
        avatar_url: Option<String>,
    ) -> AppResult<Profile> {
        let model = profile::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: profile::ActiveModel = model.into();

        if let Some(full_name) = full_name {
            active.full_name = Set(Some(full_name));
        }
        if let Some(avatar_url) = avatar_url {
            active.avatar_url = Set(Some(avatar_url));
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Profile::from(model))
    }
}
