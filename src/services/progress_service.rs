//! Progress service - lesson viewing and completion tracking.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    after_completion, ensure_actionable, lesson_view, locate, CompletionSet, Course, Enrollment,
    Lesson, LessonView, NextDestination, Progress,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

use super::parallel;

/// Progress service trait for dependency injection.
#[async_trait]
pub trait ProgressService: Send + Sync {
    /// Lesson view with navigation context for an enrolled user
    async fn lesson_view(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        lesson_id: Uuid,
    ) -> AppResult<LessonView>;

    /// Mark a lesson complete and report where to navigate next.
    ///
    /// Idempotent upsert; fails on lessons still in development.
    async fn complete_lesson(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        lesson_id: Uuid,
    ) -> AppResult<(Progress, NextDestination)>;
}

/// Concrete implementation of ProgressService using Unit of Work.
pub struct ProgressTracker<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProgressTracker<U> {
    /// Create new progress service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Load the course snapshot and check the user may view its content.
    async fn load_gated_course(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> AppResult<(Course, Vec<Lesson>, Enrollment)> {
        let courses = self.uow.courses();
        let enrollments = self.uow.enrollments();

        // Course and enrollment snapshots are independent fetches
        let (loaded, enrollment) = parallel::join2(
            courses.get_with_lessons(course_id),
            enrollments.find_for_course(user_id, course_id),
        )
        .await?;

        let (course, lessons) = loaded.ok_or(AppError::NotFound)?;

        match enrollment {
            Some(enrollment) if enrollment.grants_access() => Ok((course, lessons, enrollment)),
            _ => Err(AppError::Forbidden),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProgressService for ProgressTracker<U> {
    async fn lesson_view(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        lesson_id: Uuid,
    ) -> AppResult<LessonView> {
        let (_, lessons, _) = self.load_gated_course(user_id, course_id).await?;

        let lesson_ids = lessons.iter().map(|l| l.id).collect();
        let records = self
            .uow
            .progress()
            .list_for_lessons(user_id, lesson_ids)
            .await?;

        lesson_view(&lessons, lesson_id, &CompletionSet::from_records(&records))
    }

    async fn complete_lesson(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        lesson_id: Uuid,
    ) -> AppResult<(Progress, NextDestination)> {
        let (_, lessons, _) = self.load_gated_course(user_id, course_id).await?;

        let index = locate(&lessons, lesson_id)?;
        ensure_actionable(&lessons[index])?;

        let progress = self.uow.progress().upsert(user_id, lesson_id, true).await?;

        // Completing the last lesson sends the user back to the course;
        // the enrollment status is deliberately left untouched.
        Ok((progress, after_completion(&lessons, index)))
    }
}
