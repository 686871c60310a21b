//! Course repository - read access to the instructor-authored catalog.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::domain::{Course, Lesson};
use crate::errors::AppResult;

use super::entities::{course, lesson};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Catalog provider contract.
///
/// Courses and lessons are authored outside this system; this interface
/// is read-only.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// All published courses, newest first
    async fn list_published(&self) -> AppResult<Vec<Course>>;

    /// One course with its lessons in display order, if it exists
    async fn get_with_lessons(&self, id: Uuid) -> AppResult<Option<(Course, Vec<Lesson>)>>;
}

/// SeaORM-backed catalog store
pub struct CourseStore {
    db: DatabaseConnection,
}

impl CourseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for CourseStore {
    async fn list_published(&self) -> AppResult<Vec<Course>> {
        let models = course::Entity::find()
            .filter(course::Column::Published.eq(true))
            .order_by_desc(course::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Course::from).collect())
    }

    async fn get_with_lessons(&self, id: Uuid) -> AppResult<Option<(Course, Vec<Lesson>)>> {
        let Some(model) = course::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        // Display order is the explicit order_index, never creation time
        let lessons = lesson::Entity::find()
            .filter(lesson::Column::CourseId.eq(id))
            .order_by_asc(lesson::Column::OrderIndex)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Lesson::from)
            .collect();

        Ok(Some((Course::from(model), lessons)))
    }
}
