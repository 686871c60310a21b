//! Catalog service - course listing and the gated course detail view.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::FEATURED_COURSE_COUNT;
use crate::domain::{
    course_access, filter_and_sort, CompletionSet, Course, CourseAccess, CourseDetailView,
    CourseFilter,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Published courses matching the filter, in the requested order
    async fn list_courses(&self, filter: CourseFilter) -> AppResult<Vec<Course>>;

    /// The handful of newest published courses for the landing page
    async fn featured_courses(&self) -> AppResult<Vec<Course>>;

    /// Course detail view for an optional session user.
    ///
    /// The access mode is decided from the session and enrollment
    /// snapshot; completion flags are loaded only for enrolled viewers.
    async fn course_detail(
        &self,
        course_id: Uuid,
        user_id: Option<Uuid>,
    ) -> AppResult<CourseDetailView>;
}

/// Concrete implementation of CatalogService using Unit of Work.
pub struct Catalog<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Catalog<U> {
    /// Create new catalog service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for Catalog<U> {
    async fn list_courses(&self, filter: CourseFilter) -> AppResult<Vec<Course>> {
        let courses = self.uow.courses().list_published().await?;
        Ok(filter_and_sort(courses, &filter))
    }

    async fn featured_courses(&self) -> AppResult<Vec<Course>> {
        let mut courses = self.list_courses(CourseFilter::default()).await?;
        courses.truncate(FEATURED_COURSE_COUNT);
        Ok(courses)
    }

    async fn course_detail(
        &self,
        course_id: Uuid,
        user_id: Option<Uuid>,
    ) -> AppResult<CourseDetailView> {
        let (course, lessons) = self
            .uow
            .courses()
            .get_with_lessons(course_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let enrollment = match user_id {
            Some(user_id) => {
                self.uow
                    .enrollments()
                    .find_for_course(user_id, course_id)
                    .await?
            }
            None => None,
        };

        let access = course_access(user_id.is_some(), enrollment.as_ref());

        // Completion flags only matter once content is accessible
        let completed = match (access, user_id) {
            (CourseAccess::Viewer, Some(user_id)) => {
                let lesson_ids = lessons.iter().map(|l| l.id).collect();
                let records = self
                    .uow
                    .progress()
                    .list_for_lessons(user_id, lesson_ids)
                    .await?;
                CompletionSet::from_records(&records)
            }
            _ => CompletionSet::default(),
        };

        Ok(CourseDetailView::assemble(course, lessons, access, &completed))
    }
}
