//! Profile service - reading and editing the user's profile.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Profile, UpdateProfile};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Get a profile by user id
    async fn get_profile(&self, id: Uuid) -> AppResult<Profile>;

    /// Update display name and/or avatar
    async fn update_profile(&self, id: Uuid, update: UpdateProfile) -> AppResult<Profile>;
}

/// Concrete implementation of ProfileService using Unit of Work.
pub struct ProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfileManager<U> {
    /// Create new profile service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileService for ProfileManager<U> {
    async fn get_profile(&self, id: Uuid) -> AppResult<Profile> {
        self.uow
            .profiles()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn update_profile(&self, id: Uuid, update: UpdateProfile) -> AppResult<Profile> {
        self.uow
            .profiles()
            .update(id, update.full_name, update.avatar_url)
            .await
    }
}
