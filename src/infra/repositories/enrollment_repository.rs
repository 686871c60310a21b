//! Enrollment repository - links users to courses.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::{Enrollment, EnrollmentStatus};
use crate::errors::{AppError, AppResult};

use super::entities::{course, enrollment};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Enrollment store contract.
///
/// The (user, course) pair is unique at the store level; enrollments are
/// never deleted.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// The user's enrollment for one course, if any
    async fn find_for_course(&self, user_id: Uuid, course_id: Uuid)
        -> AppResult<Option<Enrollment>>;

    /// Create an active enrollment unless one already exists, returning
    /// the record either way
    async fn create_if_absent(&self, user_id: Uuid, course_id: Uuid) -> AppResult<Enrollment>;

    /// All of the user's enrollments, newest first
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Enrollment>>;
}

/// SeaORM-backed enrollment store
pub struct EnrollmentStore {
    db: DatabaseConnection,
}

impl EnrollmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentStore {
    async fn find_for_course(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> AppResult<Option<Enrollment>> {
        let model = enrollment::Entity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .one(&self.db)
            .await?;

        Ok(model.map(Enrollment::from))
    }

    async fn create_if_absent(&self, user_id: Uuid, course_id: Uuid) -> AppResult<Enrollment> {
        let active_model = enrollment::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            course_id: Set(course_id),
            status: Set(EnrollmentStatus::Active.to_string()),
            created_at: Set(Utc::now()),
        };

        // The unique index on (user_id, course_id) resolves races; a
        // conflicting insert simply leaves the existing row in place.
        let inserted = enrollment::Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([enrollment::Column::UserId, enrollment::Column::CourseId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        if inserted > 0 {
            // Maintain the denormalized popularity metric
            course::Entity::update_many()
                .col_expr(
                    course::Column::EnrollmentCount,
                    Expr::col(course::Column::EnrollmentCount).add(1),
                )
                .filter(course::Column::Id.eq(course_id))
                .exec(&self.db)
                .await?;
        }

        self.find_for_course(user_id, course_id)
            .await?
            .ok_or_else(|| AppError::internal("Enrollment missing after upsert"))
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Enrollment>> {
        let models = enrollment::Entity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .order_by_desc(enrollment::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Enrollment::from).collect())
    }
}
