//! Progress repository - per-lesson completion records.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::Progress;
use crate::errors::AppResult;

use super::entities::progress;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Progress store contract.
///
/// One record per (user, lesson), written with upsert semantics so that
/// completing a lesson twice is a no-op update rather than an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// The user's records for the given lessons
    async fn list_for_lessons(
        &self,
        user_id: Uuid,
        lesson_ids: Vec<Uuid>,
    ) -> AppResult<Vec<Progress>>;

    /// Insert or update the (user, lesson) record
    async fn upsert(&self, user_id: Uuid, lesson_id: Uuid, completed: bool)
        -> AppResult<Progress>;
}

/// SeaORM-backed progress store
pub struct ProgressStore {
    db: DatabaseConnection,
}

impl ProgressStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProgressRepository for ProgressStore {
    async fn list_for_lessons(
        &self,
        user_id: Uuid,
        lesson_ids: Vec<Uuid>,
    ) -> AppResult<Vec<Progress>> {
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = progress::Entity::find()
            .filter(progress::Column::UserId.eq(user_id))
            .filter(progress::Column::LessonId.is_in(lesson_ids))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Progress::from).collect())
    }

    async fn upsert(
        &self,
        user_id: Uuid,
        lesson_id: Uuid,
        completed: bool,
    ) -> AppResult<Progress> {
        let now = Utc::now();
        let active_model = progress::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            lesson_id: Set(lesson_id),
            completed: Set(completed),
            completed_at: Set(completed.then_some(now)),
            created_at: Set(now),
        };

        // The unique index on (user_id, lesson_id) turns repeat
        // completions into updates of the existing row.
        let model = progress::Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([progress::Column::UserId, progress::Column::LessonId])
                    .update_columns([progress::Column::Completed, progress::Column::CompletedAt])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await?;

        Ok(Progress::from(model))
    }
}
